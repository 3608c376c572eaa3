use serde::Deserialize;

/// Gallery layout configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UIConfig {
    /// Width of one archetype card in columns (default: 30)
    card_width: Option<u16>,
    /// Height of one archetype card in rows (default: 7)
    card_height: Option<u16>,
}

impl UIConfig {
    pub fn card_width(&self) -> u16 {
        self.card_width.unwrap_or(30)
    }

    pub fn card_height(&self) -> u16 {
        self.card_height.unwrap_or(7)
    }
}
