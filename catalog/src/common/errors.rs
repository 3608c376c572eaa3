use crate::color::ColorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating an archetype catalog.
///
/// Loading happens once at startup, so every variant is terminal for the
/// catalog being built: the caller either fixes the dataset or falls back to
/// the embedded catalog.
///
/// # Examples
///
/// ```no_run
/// use catalog::{Catalog, CatalogError, ColorPolicy};
///
/// match Catalog::load("archetypes.json", ColorPolicy::Strict) {
///     Ok(catalog) => println!("{} archetypes loaded", catalog.len()),
///     Err(CatalogError::InvalidColor { name, source }) => {
///         eprintln!("Archetype '{name}' has a bad colour: {source}");
///     }
///     Err(other) => eprintln!("Catalog unavailable: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON for the archetype schema.
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset is not valid TOML for the archetype schema.
    #[error("Failed to parse catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported catalog format for '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Two archetypes share a payload signature, which is the rendering key.
    #[error("Duplicate payload signature '{signature}' (archetypes '{first}' and '{second}')")]
    DuplicateSignature {
        signature: String,
        first: String,
        second: String,
    },

    /// An archetype's colour is not a valid `#RRGGBB` code.
    #[error("Archetype '{name}' has an invalid colour: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorError,
    },
}
