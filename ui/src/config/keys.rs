use serde::Deserialize;

/// Key bindings configuration
///
/// Arrow keys, Enter, Tab and Esc always work; these add single-character
/// alternatives for the grid, the category picker and the detail view.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,

    // Navigation keys
    key_up: Option<char>,
    key_down: Option<char>,
    key_left: Option<char>,
    key_right: Option<char>,

    // Card actions
    key_open: Option<char>,
}

impl KeyBindingsConfig {
    /// Quits from the grid; Ctrl+<quit> quits from anywhere.
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn up(&self) -> char {
        self.key_up.unwrap_or('k')
    }

    pub fn down(&self) -> char {
        self.key_down.unwrap_or('j')
    }

    pub fn left(&self) -> char {
        self.key_left.unwrap_or('h')
    }

    pub fn right(&self) -> char {
        self.key_right.unwrap_or('l')
    }

    pub fn open(&self) -> char {
        self.key_open.unwrap_or('o')
    }

    /// All bindings with their config key, for conflict checks.
    pub fn bindings(&self) -> [(&'static str, char); 6] {
        [
            ("key_quit", self.quit()),
            ("key_up", self.up()),
            ("key_down", self.down()),
            ("key_left", self.left()),
            ("key_right", self.right()),
            ("key_open", self.open()),
        ]
    }
}
