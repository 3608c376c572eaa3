//! # Configuration Module
//!
//! Layered configuration for the Moodji gallery. Sources are merged in this
//! order, later sources overriding earlier ones:
//!
//! 1. The defaults embedded in the binary (`config.default.toml`)
//! 2. `<platform config dir>/moodji/config.toml`
//! 3. `./config.toml`
//! 4. Environment variables prefixed with `MOODJI_` (`__` reaches nested
//!    sections, e.g. `MOODJI_UI__CARD_WIDTH=36`). A `.env` file is read first.
//!
//! The merged result is loaded once and cached for the lifetime of the process.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::path::PathBuf;

pub mod app;
pub mod defaults;
pub mod keys;
pub mod limits;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

const ENV_PREFIX: &str = "MOODJI";

static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// `<platform config dir>/moodji/config.toml`, when the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moodji").join("config.toml"))
}

fn base_builder() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> ConfigLoadResult {
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = base_builder();
    if let Some(path) = user_config_path() {
        builder = builder.add_source(File::from(path).required(false));
    }
    builder = builder
        .add_source(File::with_name("config.toml").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

    finish(builder)
}

/// Merge a TOML document over the embedded defaults, ignoring files and the
/// environment.
pub fn load_from_str(overrides: &str) -> ConfigLoadResult {
    finish(base_builder().add_source(File::from_str(overrides, FileFormat::Toml)))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            panic!("Failed to load config: {e}");
        }
        ConfigLoadResult::DeserializeError(e) => {
            panic!("Failed to deserialize config: {e}");
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
