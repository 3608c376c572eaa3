use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid card_width: {configured} (min: {min_limit}, max: {max_limit})")]
    CardWidth {
        configured: u16,
        min_limit: u16,
        max_limit: u16,
    },
    #[error("Invalid card_height: {configured} (min: {min_limit}, max: {max_limit})")]
    CardHeight {
        configured: u16,
        min_limit: u16,
        max_limit: u16,
    },
    #[error("Invalid poll_timeout_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    PollTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Key '{key}' is bound to both {first} and {second}")]
    KeyConflict {
        key: char,
        first: &'static str,
        second: &'static str,
    },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::CardWidth {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Card width out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update card_width in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::CardHeight {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Card height out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update card_height in the [ui] section of config.toml."
                )
            }
            ConfigValidationError::PollTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Poll timeout out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update poll_timeout_ms in config.toml."
                )
            }
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml."
                )
            }
            ConfigValidationError::KeyConflict { key, first, second } => {
                format!(
                    "Conflicting key bindings!\n\n\
                    The key '{key}' is used by both {first} and {second}.\n\n\
                    Please give each binding in the [keys] section its own key."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
