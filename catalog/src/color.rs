//! Colour derivation for archetype theming.
//!
//! Archetypes carry a `#RRGGBB` colour. The gallery converts it to HSL and
//! classifies it as light or dark so that text drawn on top of the colour
//! stays readable.

use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a `#RRGGBB` colour code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour '{value}' must start with '#'")]
    MissingHash { value: String },

    #[error("colour '{value}' must be 7 characters long (#RRGGBB), got {len}")]
    InvalidLength { value: String, len: usize },

    #[error("colour '{value}' contains non-hexadecimal digits")]
    InvalidDigits { value: String },
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`. `ratio` 0.0 keeps `self`, 1.0 yields `other`.
    pub fn mix(self, other: Rgb, ratio: f64) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio).round() as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a strict `#RRGGBB` code (either letter case).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    if !hex.starts_with('#') {
        return Err(ColorError::MissingHash {
            value: hex.to_string(),
        });
    }
    if hex.len() != 7 {
        return Err(ColorError::InvalidLength {
            value: hex.to_string(),
            len: hex.len(),
        });
    }

    let digits = &hex[1..];
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigits {
            value: hex.to_string(),
        });
    }

    let pair = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidDigits {
            value: hex.to_string(),
        })
    };

    Ok(Rgb {
        r: pair(0..2)?,
        g: pair(2..4)?,
        b: pair(4..6)?,
    })
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn tone(&self) -> Tone {
        if self.lightness > 50 {
            Tone::Light
        } else {
            Tone::Dark
        }
    }

    pub fn is_light(&self) -> bool {
        self.tone() == Tone::Light
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let max_channel = rgb.r.max(rgb.g).max(rgb.b);
        let min_channel = rgb.r.min(rgb.g).min(rgb.b);

        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = f64::from(max_channel) / 255.0;
        let min = f64::from(min_channel) / 255.0;

        let lightness = (max + min) / 2.0;
        let (hue, saturation) = if max_channel == min_channel {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            // Red wins ties, then green, then blue.
            let sector = if max_channel == rgb.r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max_channel == rgb.g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (sector / 6.0, saturation)
        };

        Hsl {
            hue: (hue * 360.0).round() as u16,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

/// Convert a `#RRGGBB` code to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    parse_hex(hex).map(Hsl::from)
}

/// Light/dark classification of a colour, used to pick contrasting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    /// Classify a colour code. Codes that do not parse are `Dark`.
    pub fn for_hex(hex: &str) -> Tone {
        match hex_to_hsl(hex) {
            Ok(hsl) => hsl.tone(),
            Err(e) => {
                log::debug!("Treating unparseable colour as dark: {e}");
                Tone::Dark
            }
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Tone::Light
    }

    /// Foreground that reads well on top of a colour with this tone.
    pub fn contrast(&self) -> Rgb {
        match self {
            Tone::Light => Rgb::new(0x11, 0x11, 0x18),
            Tone::Dark => Rgb::new(0xF5, 0xF5, 0xF7),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Light => f.write_str("light"),
            Tone::Dark => f.write_str("dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn hsl(hue: u16, saturation: u8, lightness: u8) -> Hsl {
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    #[test]
    fn test_black_white_and_red() {
        assert_eq!(hex_to_hsl("#000000"), Ok(hsl(0, 0, 0)));
        assert_eq!(hex_to_hsl("#FFFFFF"), Ok(hsl(0, 0, 100)));
        assert_eq!(hex_to_hsl("#FF0000"), Ok(hsl(0, 100, 50)));
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_eq!(hex_to_hsl("#00FF00"), Ok(hsl(120, 100, 50)));
        assert_eq!(hex_to_hsl("#0000FF"), Ok(hsl(240, 100, 50)));
        assert_eq!(hex_to_hsl("#FFFF00"), Ok(hsl(60, 100, 50)));
        assert_eq!(hex_to_hsl("#FF00FF"), Ok(hsl(300, 100, 50)));
    }

    #[test]
    fn test_mixed_colours() {
        // blue channel is max, lightness just above 0.5
        assert_eq!(hex_to_hsl("#6D28D9"), Ok(hsl(263, 70, 50)));
        // blue channel is max, lightness below 0.5
        assert_eq!(hex_to_hsl("#1D4ED8"), Ok(hsl(224, 76, 48)));
        // red channel is max, light colour
        assert_eq!(hex_to_hsl("#FDE68A"), Ok(hsl(48, 97, 77)));
    }

    #[test]
    fn test_lowercase_digits_are_accepted() {
        assert_eq!(hex_to_hsl("#fde68a"), hex_to_hsl("#FDE68A"));
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray = assert_ok!(hex_to_hsl("#808080"));
        assert_eq!(gray.hue, 0);
        assert_eq!(gray.saturation, 0);
        assert_eq!(gray.lightness, 50);
        assert_eq!(gray.tone(), Tone::Dark);
    }

    #[test]
    fn test_tone_threshold_is_strictly_above_fifty() {
        assert_eq!(hsl(0, 0, 50).tone(), Tone::Dark);
        assert_eq!(hsl(0, 0, 51).tone(), Tone::Light);
        assert!(assert_ok!(hex_to_hsl("#FFFFFF")).is_light());
    }

    #[test]
    fn test_malformed_codes_are_rejected() {
        assert!(matches!(
            hex_to_hsl("FF0000"),
            Err(ColorError::MissingHash { .. })
        ));
        assert!(matches!(
            hex_to_hsl("#FFF"),
            Err(ColorError::InvalidLength { len: 4, .. })
        ));
        assert!(matches!(
            hex_to_hsl("#GG0000"),
            Err(ColorError::InvalidDigits { .. })
        ));
        assert_err!(hex_to_hsl(""));
        assert_err!(hex_to_hsl("#FF00é"));
    }

    #[test]
    fn test_tone_for_unparseable_colour_is_dark() {
        assert_eq!(Tone::for_hex("not a colour"), Tone::Dark);
        assert_eq!(Tone::for_hex("#FFFFFF"), Tone::Light);
        assert_eq!(Tone::for_hex("#000000"), Tone::Dark);
    }

    #[test]
    fn test_hsl_display_matches_css_form() {
        assert_eq!(hsl(263, 70, 50).to_string(), "263 70% 50%");
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0), white);
        assert_eq!(black.mix(white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.mix(white, 7.0), white);
    }

    #[test]
    fn test_rgb_display_round_trips_through_parse() {
        let rgb = Rgb::new(0x6D, 0x28, 0xD9);
        assert_eq!(rgb.to_string(), "#6D28D9");
        assert_eq!(parse_hex(&rgb.to_string()), Ok(rgb));
    }
}
