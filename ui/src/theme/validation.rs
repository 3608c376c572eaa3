use crate::error::AppError;
use crate::theme::types::Theme;
use crate::validation::Validator;
use std::path::Path;

/// Validation errors specific to theme operations
#[derive(Debug, Clone)]
pub enum ThemeValidationError {
    InvalidThemeName { name: String, reason: String },
    InvalidFlavorName { flavor: String, reason: String },
    InvalidThemePath { path: String, reason: String },
    MissingMetadata { field: String },
    InvalidColor { field: String, value: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::InvalidThemeName { name, reason } => {
                format!(
                    "Invalid theme name: '{name}'\n\n\
                    Reason: {reason}\n\n\
                    Theme names may contain letters, digits, hyphens and underscores."
                )
            }
            ThemeValidationError::InvalidFlavorName { flavor, reason } => {
                format!(
                    "Invalid flavor name: '{flavor}'\n\n\
                    Reason: {reason}\n\n\
                    Flavor names may contain letters, digits, hyphens and underscores."
                )
            }
            ThemeValidationError::InvalidThemePath { path, reason } => {
                format!(
                    "Invalid theme file: '{path}'\n\n\
                    Reason: {reason}"
                )
            }
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Add it to the [metadata] table of the theme file."
                )
            }
            ThemeValidationError::InvalidColor { field, value } => {
                format!(
                    "Invalid theme colour for '{field}': '{value}'\n\n\
                    This colour must be written as #RRGGBB."
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Config(error.user_message())
    }
}

/// Shared rules for theme and flavor identifiers. Returns the reason on failure.
fn check_identifier(input: &str, max_len: usize) -> Result<(), String> {
    if input.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if input.len() > max_len {
        return Err(format!("Name too long (max {max_len} characters)"));
    }

    if !input
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err("Name contains characters other than letters, digits, '-' and '_'".to_string());
    }

    let edge = |c: char| c == '-' || c == '_';
    if input.starts_with(edge) || input.ends_with(edge) {
        return Err("Name cannot start or end with hyphens or underscores".to_string());
    }

    Ok(())
}

/// Validator for theme names
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_identifier(input, 50).map_err(|reason| ThemeValidationError::InvalidThemeName {
            name: input.to_string(),
            reason,
        })
    }
}

/// Validator for flavor names
pub struct FlavorNameValidator;

impl Validator<str> for FlavorNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        check_identifier(input, 30).map_err(|reason| ThemeValidationError::InvalidFlavorName {
            flavor: input.to_string(),
            reason,
        })
    }
}

/// Validator for theme files found on disk
pub struct ThemePathValidator;

impl Validator<Path> for ThemePathValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        let invalid = |reason: &str| ThemeValidationError::InvalidThemePath {
            path: input.display().to_string(),
            reason: reason.to_string(),
        };

        if !input.is_file() {
            return Err(invalid("Path is not a file"));
        }

        if input.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(invalid("Theme files must have a .toml extension"));
        }

        Ok(())
    }
}

/// Validator for loaded theme content
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        if let Some(ref theme_name) = input.metadata.theme_name {
            ThemeNameValidator.validate(theme_name)?;
        }

        if let Some(ref flavor_name) = input.metadata.flavor_name {
            FlavorNameValidator.validate(flavor_name)?;
        }

        // Display names may contain spaces, so only presence is checked
        if input.metadata.name.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "name".to_string(),
            });
        }

        if input.metadata.description.is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "description".to_string(),
            });
        }

        // Card backgrounds are blended from this base, so it must be a real RGB value
        let colors = &input.colors;
        if colors.rgb(&colors.card_surface).is_none() {
            return Err(ThemeValidationError::InvalidColor {
                field: "card_surface".to_string(),
                value: colors.card_surface.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_theme;
    use claims::{assert_err, assert_ok};

    fn embedded(flavor: &str) -> Theme {
        toml::from_str(default_theme("moodji", flavor).expect("embedded theme"))
            .expect("embedded theme parses")
    }

    #[test]
    fn test_theme_name_validator() {
        let validator = ThemeNameValidator;

        assert_ok!(validator.validate("moodji"));
        assert_ok!(validator.validate("night-sky"));
        assert_ok!(validator.validate("pastel_2"));

        assert_err!(validator.validate(""));
        assert_err!(validator.validate("_hidden"));
        assert_err!(validator.validate("trailing-"));
        assert_err!(validator.validate("../escape"));
        assert_err!(validator.validate(&"a".repeat(51)));
    }

    #[test]
    fn test_flavor_name_validator() {
        let validator = FlavorNameValidator;

        assert_ok!(validator.validate("dark"));
        assert_ok!(validator.validate("high-contrast"));

        assert_err!(validator.validate(""));
        assert_err!(validator.validate("dark/light"));
        assert_err!(validator.validate(&"a".repeat(31)));
    }

    #[test]
    fn test_embedded_themes_are_valid() {
        assert_ok!(ThemeValidator.validate(&embedded("dark")));
        assert_ok!(ThemeValidator.validate(&embedded("light")));
    }

    #[test]
    fn test_theme_validator_rejects_missing_description() {
        let mut theme = embedded("dark");
        theme.metadata.description.clear();
        let error = assert_err!(ThemeValidator.validate(&theme));
        assert!(error.user_message().contains("description"));
    }

    #[test]
    fn test_theme_validator_rejects_named_card_surface() {
        let mut theme = embedded("light");
        theme.colors.card_surface = "white".to_string();
        let error = assert_err!(ThemeValidator.validate(&theme));
        assert!(matches!(error, ThemeValidationError::InvalidColor { .. }));
    }

    #[test]
    fn test_path_validator_requires_toml_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_err!(ThemePathValidator.validate(dir.path()));

        let json = dir.path().join("dark.json");
        std::fs::write(&json, "{}").expect("write file");
        assert_err!(ThemePathValidator.validate(&json));

        let toml_file = dir.path().join("dark.toml");
        std::fs::write(&toml_file, "").expect("write file");
        assert_ok!(ThemePathValidator.validate(&toml_file));
    }
}
