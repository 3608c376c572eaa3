use super::{
    LoggingConfig, keys::KeyBindingsConfig, limits::*, ui::UIConfig,
    validation::ConfigValidationError,
};
use crate::theme::types::ThemeConfig;
use catalog::ColorPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    // Catalog source
    catalog_path: Option<String>,
    strict_colors: Option<bool>,

    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    theme: Option<ThemeConfig>,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let card_width = self.ui.card_width();
        if !(MIN_CARD_WIDTH..=MAX_CARD_WIDTH).contains(&card_width) {
            errors.push(ConfigValidationError::CardWidth {
                configured: card_width,
                min_limit: MIN_CARD_WIDTH,
                max_limit: MAX_CARD_WIDTH,
            });
        }

        let card_height = self.ui.card_height();
        if !(MIN_CARD_HEIGHT..=MAX_CARD_HEIGHT).contains(&card_height) {
            errors.push(ConfigValidationError::CardHeight {
                configured: card_height,
                min_limit: MIN_CARD_HEIGHT,
                max_limit: MAX_CARD_HEIGHT,
            });
        }

        let poll_timeout = self.poll_timeout().as_millis() as u64;
        if !(MIN_POLL_TIMEOUT_MS..=MAX_POLL_TIMEOUT_MS).contains(&poll_timeout) {
            errors.push(ConfigValidationError::PollTimeout {
                configured: poll_timeout,
                min_limit: MIN_POLL_TIMEOUT_MS,
                max_limit: MAX_POLL_TIMEOUT_MS,
            });
        }

        let tick_interval = self.tick_interval().as_millis() as u64;
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick_interval) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick_interval,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let bindings = self.keys.bindings();
        for (i, &(first, key)) in bindings.iter().enumerate() {
            if let Some(&(second, _)) = bindings[i + 1..].iter().find(|(_, other)| *other == key) {
                errors.push(ConfigValidationError::KeyConflict { key, first, second });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(250))
    }

    /// Dataset to load instead of the built-in catalog
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    }

    pub fn strict_colors(&self) -> bool {
        self.strict_colors.unwrap_or(true)
    }

    pub fn color_policy(&self) -> ColorPolicy {
        ColorPolicy::from_strict_flag(self.strict_colors())
    }

    // Configuration section accessors
    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoadResult, load_from_str};
    use claims::{assert_err, assert_none, assert_ok};

    fn load(overrides: &str) -> Box<AppConfig> {
        match load_from_str(overrides) {
            ConfigLoadResult::Success(config) => config,
            ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
                panic!("config should load: {e}")
            }
        }
    }

    #[test]
    fn test_embedded_defaults() {
        let config = load("");
        assert_ok!(config.validate());
        assert_eq!(config.ui().card_width(), 30);
        assert_eq!(config.ui().card_height(), 7);
        assert_eq!(config.keys().quit(), 'q');
        assert_eq!(config.keys().open(), 'o');
        assert!(config.strict_colors());
        assert_eq!(config.color_policy(), ColorPolicy::Strict);
        assert_none!(config.catalog_path());
        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.theme().theme_name, "moodji");
        assert_eq!(config.poll_timeout(), Duration::from_millis(50));
    }

    #[test]
    fn test_overrides_layer_on_defaults() {
        let config = load(
            r#"
            catalog_path = "my-archetypes.toml"
            strict_colors = false

            [ui]
            card_width = 40

            [keys]
            key_quit = "x"
            "#,
        );
        assert_eq!(
            config.catalog_path(),
            Some(PathBuf::from("my-archetypes.toml"))
        );
        assert_eq!(config.color_policy(), ColorPolicy::Tolerant);
        assert_eq!(config.ui().card_width(), 40);
        assert_eq!(config.ui().card_height(), 7);
        assert_eq!(config.keys().quit(), 'x');
        assert_eq!(config.keys().down(), 'j');
    }

    #[test]
    fn test_blank_catalog_path_means_builtin() {
        let config = load("catalog_path = \"  \"");
        assert_none!(config.catalog_path());
    }

    #[test]
    fn test_out_of_range_values_are_reported() {
        let config = load(
            r#"
            poll_timeout_ms = 0

            [ui]
            card_width = 4
            card_height = 50
            "#,
        );
        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[0],
            ConfigValidationError::CardWidth { configured: 4, .. }
        ));
        assert!(matches!(
            errors[1],
            ConfigValidationError::CardHeight { configured: 50, .. }
        ));
        assert!(matches!(
            errors[2],
            ConfigValidationError::PollTimeout { configured: 0, .. }
        ));
        assert!(errors[0].user_message().contains("card_width"));
    }

    #[test]
    fn test_key_conflicts_are_reported() {
        let config = load(
            r#"
            [keys]
            key_open = "q"
            "#,
        );
        let errors = assert_err!(config.validate());
        assert!(matches!(
            errors[0],
            ConfigValidationError::KeyConflict {
                key: 'q',
                first: "key_quit",
                second: "key_open"
            }
        ));
    }
}
