use catalog::Rgb;
use catalog::color::parse_hex;
use serde::{Deserialize, Serialize};
use tuirealm::props::Color;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    pub description: String,
    pub author: String,
    pub theme_name: Option<String>,
    pub flavor_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // === Core Text Colors ===
    pub text_primary: String,
    pub text_muted: String,

    // === Layout Colors ===
    pub surface: String,
    pub backdrop: String,

    // === Accent Colors ===
    pub primary_accent: String,
    pub title_accent: String,
    pub header_accent: String,

    // === Selection Colors ===
    pub selection_bg: String,
    pub selection_fg: String,

    // === Card Colors ===
    /// Base that archetype colours are blended into for card backgrounds
    pub card_surface: String,
    /// Border for cards whose own colour is unusable
    pub card_border: String,

    // === Status Colors ===
    pub status_warning: String,
    pub status_error: String,
    pub status_info: String,

    // === Help System Colors ===
    pub shortcut_key: String,
    pub shortcut_description: String,
    pub help_section_title: String,

    // === Popup System Colors ===
    pub popup_background: String,
    pub popup_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub theme_name: String,
    pub flavor_name: String,
}

impl ThemeColors {
    /// Convert a colour name or `#RRGGBB` string to a tuirealm Color
    pub fn hex_to_color(&self, hex: &str) -> Color {
        if hex.is_empty() {
            return Color::Reset;
        }

        match hex.to_lowercase().as_str() {
            "reset" => Color::Reset,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            _ => match parse_hex(hex) {
                Ok(rgb) => rgb_to_color(rgb),
                Err(e) => {
                    log::debug!("Unknown theme colour '{hex}': {e}");
                    Color::Reset
                }
            },
        }
    }

    /// RGB value of a `#RRGGBB` theme entry, if it is one
    pub fn rgb(&self, hex: &str) -> Option<Rgb> {
        parse_hex(hex).ok()
    }
}

pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme_name: "moodji".to_string(),
            flavor_name: "dark".to_string(),
        }
    }
}
