//! # Theme System Module
//!
//! Colours for the gallery's chrome (text, accents, help bar, popups) come
//! from a theme file selected in the `[theme]` config section. Themes are
//! looked up as `<themes dir>/<theme>/<flavor>.toml`, with the directory found
//! in `<config dir>/moodji/themes`, `./themes` or `./ui/themes`. The `moodji`
//! theme ships `dark` and `light` flavors embedded in the binary, so it loads
//! even when no directory exists.
//!
//! Card colours are not part of the theme: each card derives its accent,
//! background and text colours from its archetype's hex through
//! [`ThemeManager::card_palette`].
//!
//! ```no_run
//! use moodji::theme::{ThemeConfig, ThemeManager};
//!
//! ThemeManager::init_global(&ThemeConfig::default())?;
//! let accent = ThemeManager::primary_accent();
//! let card = ThemeManager::card_palette("#FDE68A");
//! ```
//!
//! All accessors fall back to fixed terminal colours when the manager is
//! not initialized or its lock is busy, so rendering never fails on theme
//! problems.

pub mod loader;
pub mod manager;
pub mod types;
pub mod validation;

pub use manager::{CardPalette, ThemeManager};
pub use types::ThemeConfig;
