use crate::error::{AppError, AppResult};
use crate::theme::{
    loader::ThemeLoader,
    types::{Theme, ThemeConfig, rgb_to_color},
};
use catalog::{Rgb, Tone};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

use tuirealm::props::Color;

static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

// Used when the theme could not be loaded or is momentarily locked
mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const SURFACE: Color = Color::Black;
    pub const BACKDROP: Color = Color::Black;
    pub const PRIMARY_ACCENT: Color = Color::Magenta;
    pub const TITLE_ACCENT: Color = Color::LightYellow;
    pub const HEADER_ACCENT: Color = Color::LightCyan;
    pub const SELECTION_BG: Color = Color::DarkGray;
    pub const SELECTION_FG: Color = Color::White;
    pub const CARD_BORDER: Color = Color::Gray;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_INFO: Color = Color::Blue;
    pub const SHORTCUT_KEY: Color = Color::LightMagenta;
    pub const SHORTCUT_DESCRIPTION: Color = Color::Gray;
    pub const HELP_SECTION_TITLE: Color = Color::LightCyan;
    pub const POPUP_BACKGROUND: Color = Color::Black;
    pub const POPUP_TEXT: Color = Color::White;
}

/// Portion of an archetype's own colour used for its card background
const CARD_TINT: f64 = 0.35;

/// Colours for drawing one archetype card, derived from its hex and tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPalette {
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    /// Foreground for text drawn directly on the accent, chosen by the archetype's tone
    pub badge_text: Color,
}

pub struct ThemeManager {
    current_theme: Arc<Theme>,
}

impl ThemeManager {
    /// Initialize the global theme manager. Call once at startup.
    pub fn init_global(config: &ThemeConfig) -> AppResult<()> {
        let theme = ThemeLoader::new().load_theme_from_config(config)?;

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(Self {
                current_theme: Arc::new(theme),
            }))
            .map_err(|_| AppError::Config("Theme manager already initialized".to_string()))?;

        log::info!(
            "Global theme manager initialized with {}/{}",
            config.theme_name,
            config.flavor_name
        );
        Ok(())
    }

    fn with_theme_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&Arc<Theme>) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(manager) => f(&manager.current_theme),
                Err(_) => {
                    log::warn!("Theme manager lock contention, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }

    fn get_theme_color<F>(color_getter: F, fallback: Color) -> Color
    where
        F: FnOnce(&Theme) -> Color,
    {
        Self::with_theme_manager(|theme| color_getter(theme), fallback)
    }

    /// Colours for a card whose archetype has the given hex.
    ///
    /// Valid colours are blended into the theme's card surface for the
    /// background. Body text contrasts with that blend, badge text with the
    /// archetype's own tone. Unparseable colours fall back to theme colours.
    pub fn card_palette(hex: &str) -> CardPalette {
        let base = Self::with_theme_manager(
            |theme| theme.colors.rgb(&theme.colors.card_surface),
            None,
        );
        card_palette_over(hex, base)
    }
}

pub(crate) fn card_palette_over(hex: &str, base: Option<Rgb>) -> CardPalette {
    match catalog::color::parse_hex(hex) {
        Ok(rgb) => {
            let tone = Tone::for_hex(hex);
            let background = match base {
                Some(base) => base.mix(rgb, CARD_TINT),
                None => rgb,
            };
            // Pick the text colour against the blended background, not the raw hex
            let text_tone = if base.is_some() {
                catalog::Hsl::from(background).tone()
            } else {
                tone
            };
            CardPalette {
                accent: rgb_to_color(rgb),
                background: rgb_to_color(background),
                text: rgb_to_color(text_tone.contrast()),
                badge_text: rgb_to_color(tone.contrast()),
            }
        }
        Err(_) => CardPalette {
            accent: ThemeManager::card_border(),
            background: ThemeManager::surface(),
            text: ThemeManager::text_primary(),
            badge_text: rgb_to_color(Tone::Dark.contrast()),
        },
    }
}

macro_rules! theme_accessor {
    ($method:ident, $field:ident, $fallback:expr) => {
        impl ThemeManager {
            pub fn $method() -> Color {
                Self::get_theme_color(
                    |theme| theme.colors.hex_to_color(&theme.colors.$field),
                    $fallback,
                )
            }
        }
    };
}

theme_accessor!(text_primary, text_primary, fallback_colors::TEXT_PRIMARY);
theme_accessor!(text_muted, text_muted, fallback_colors::TEXT_MUTED);
theme_accessor!(surface, surface, fallback_colors::SURFACE);
theme_accessor!(backdrop, backdrop, fallback_colors::BACKDROP);
theme_accessor!(
    primary_accent,
    primary_accent,
    fallback_colors::PRIMARY_ACCENT
);
theme_accessor!(title_accent, title_accent, fallback_colors::TITLE_ACCENT);
theme_accessor!(header_accent, header_accent, fallback_colors::HEADER_ACCENT);
theme_accessor!(selection_bg, selection_bg, fallback_colors::SELECTION_BG);
theme_accessor!(selection_fg, selection_fg, fallback_colors::SELECTION_FG);
theme_accessor!(card_border, card_border, fallback_colors::CARD_BORDER);
theme_accessor!(
    status_warning,
    status_warning,
    fallback_colors::STATUS_WARNING
);
theme_accessor!(status_error, status_error, fallback_colors::STATUS_ERROR);
theme_accessor!(status_info, status_info, fallback_colors::STATUS_INFO);
theme_accessor!(shortcut_key, shortcut_key, fallback_colors::SHORTCUT_KEY);
theme_accessor!(
    shortcut_description,
    shortcut_description,
    fallback_colors::SHORTCUT_DESCRIPTION
);
theme_accessor!(
    help_section_title,
    help_section_title,
    fallback_colors::HELP_SECTION_TITLE
);
theme_accessor!(
    popup_background,
    popup_background,
    fallback_colors::POPUP_BACKGROUND
);
theme_accessor!(popup_text, popup_text, fallback_colors::POPUP_TEXT);
