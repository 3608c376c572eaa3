use super::{Archetype, Catalog, ColorPolicy};
use crate::common::errors::CatalogError;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_ARCHETYPES: &str = include_str!("../../data/archetypes.json");

/// TOML datasets wrap the list in an `[[archetypes]]` array of tables.
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    archetypes: Vec<Archetype>,
}

impl Catalog {
    /// Parse a JSON array of archetypes.
    pub fn from_json_str(json: &str, policy: ColorPolicy) -> Result<Self, CatalogError> {
        let entries: Vec<Archetype> = serde_json::from_str(json)?;
        Self::new(entries, policy)
    }

    /// Parse a TOML document made of `[[archetypes]]` tables.
    pub fn from_toml_str(toml: &str, policy: ColorPolicy) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(toml)?;
        Self::new(parsed.archetypes, policy)
    }

    /// Load a dataset file, choosing the parser from its extension.
    pub fn load(path: impl AsRef<Path>, policy: ColorPolicy) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let parse: fn(&str, ColorPolicy) -> Result<Self, CatalogError> = match extension.as_deref()
        {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loading archetype catalog from {}", path.display());
        parse(&content, policy)
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_ARCHETYPES, ColorPolicy::Strict)
    }
}
