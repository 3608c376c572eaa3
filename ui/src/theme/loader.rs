use crate::config::defaults::default_theme;
use crate::error::{AppError, AppResult};
use crate::theme::types::{Theme, ThemeConfig};
use crate::theme::validation::{
    FlavorNameValidator, ThemeNameValidator, ThemePathValidator, ThemeValidator,
};
use crate::validation::Validator;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Loads themes from a themes directory, falling back to the themes embedded
/// in the binary when no file exists for the requested name and flavor.
pub struct ThemeLoader {
    themes_dir: Option<PathBuf>,
    theme_name_validator: ThemeNameValidator,
    flavor_name_validator: FlavorNameValidator,
    path_validator: ThemePathValidator,
    theme_validator: ThemeValidator,
}

impl ThemeLoader {
    pub fn new() -> Self {
        Self::with_themes_dir(Self::find_themes_directory())
    }

    pub fn with_themes_dir(themes_dir: Option<PathBuf>) -> Self {
        Self {
            themes_dir,
            theme_name_validator: ThemeNameValidator,
            flavor_name_validator: FlavorNameValidator,
            path_validator: ThemePathValidator,
            theme_validator: ThemeValidator,
        }
    }

    fn find_themes_directory() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("moodji").join("themes"));
        }
        candidates.extend([
            PathBuf::from("themes"),
            PathBuf::from("ui/themes"),
            PathBuf::from("../themes"),
        ]);

        let found = candidates.into_iter().find(|path| path.is_dir());
        match &found {
            Some(path) => log::info!("Found themes directory at: {}", path.display()),
            None => log::info!("No themes directory found, using embedded themes"),
        }
        found
    }

    pub fn load_theme(&self, theme_name: &str, flavor_name: &str) -> AppResult<Theme> {
        self.theme_name_validator.validate(theme_name)?;
        self.flavor_name_validator.validate(flavor_name)?;

        let mut theme = match self.theme_file(theme_name, flavor_name) {
            Some(path) => Self::parse_file(&path)?,
            None => match default_theme(theme_name, flavor_name) {
                Some(content) => {
                    log::debug!("Using embedded theme {theme_name}/{flavor_name}");
                    Self::parse(content, &format!("embedded {theme_name}/{flavor_name}"))?
                }
                None => {
                    return Err(AppError::Config(format!(
                        "Theme '{theme_name}' with flavor '{flavor_name}' was not found"
                    )));
                }
            },
        };

        if theme.metadata.name.is_empty() {
            theme.metadata.name = theme_name.to_string();
        }
        if theme.metadata.theme_name.is_none() {
            theme.metadata.theme_name = Some(theme_name.to_string());
        }
        if theme.metadata.flavor_name.is_none() {
            theme.metadata.flavor_name = Some(flavor_name.to_string());
        }

        self.theme_validator.validate(&theme)?;

        Ok(theme)
    }

    pub fn load_theme_from_config(&self, config: &ThemeConfig) -> AppResult<Theme> {
        self.load_theme(&config.theme_name, &config.flavor_name)
    }

    fn theme_file(&self, theme_name: &str, flavor_name: &str) -> Option<PathBuf> {
        let path = self
            .themes_dir
            .as_ref()?
            .join(theme_name)
            .join(format!("{flavor_name}.toml"));
        path.exists().then_some(path)
    }

    fn parse_file(path: &Path) -> AppResult<Theme> {
        ThemePathValidator.validate(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read theme file '{}': {e}",
                path.display()
            ))
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, source: &str) -> AppResult<Theme> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse theme '{source}': {e}")))
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}
