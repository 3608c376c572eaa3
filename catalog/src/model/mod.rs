use crate::color::{ColorError, Hsl, Rgb, Tone, hex_to_hsl, parse_hex};
use crate::common::errors::CatalogError;
use crate::filter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod loader;

/// One catalog entry: a themed card with descriptive and styling metadata.
///
/// Archetypes are immutable once loaded. Field names follow the camelCase
/// layout of the dataset files.
///
/// # Examples
///
/// ```no_run
/// use catalog::Archetype;
///
/// let json = r##"{
///     "name": "The Lantern",
///     "category": "Wonder",
///     "moodTone": "Quiet awe",
///     "description": "A small light held up against a large dark.",
///     "hex": "#FDE68A",
///     "emojiSigils": "🏮 ✨",
///     "visualArrival": "Fades up from a single point",
///     "soundtrack": "Music box in a cathedral",
///     "accentAnimation": "Slow pulse",
///     "arrivalStyleGroup": "Glow",
///     "uiComponents": "Card, Halo",
///     "payloadSignature": "wonder.lantern.v1"
/// }"##;
/// let archetype: Archetype = serde_json::from_str(json)?;
/// assert!(archetype.tone().is_light());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: String,
    pub category: String,
    pub mood_tone: String,
    pub description: String,
    pub hex: String,
    pub emoji_sigils: String,
    pub visual_arrival: String,
    pub soundtrack: String,
    pub accent_animation: String,
    pub arrival_style_group: String,
    pub ui_components: String,
    pub payload_signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Archetype {
    pub fn hsl(&self) -> Result<Hsl, ColorError> {
        hex_to_hsl(&self.hex)
    }

    pub fn rgb(&self) -> Result<Rgb, ColorError> {
        parse_hex(&self.hex)
    }

    /// Light/dark classification; entries with an unparseable colour are dark.
    pub fn tone(&self) -> Tone {
        Tone::for_hex(&self.hex)
    }

    /// First glyph of the sigil string, shown as the entry's icon.
    pub fn primary_sigil(&self) -> Option<&str> {
        self.emoji_sigils.split(' ').find(|s| !s.is_empty())
    }
}

/// How the loader treats archetypes whose `hex` is not a valid `#RRGGBB` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Reject the catalog at load time.
    #[default]
    Strict,
    /// Keep the entry; it classifies as dark and renders with fallback colours.
    Tolerant,
}

impl ColorPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            ColorPolicy::Strict
        } else {
            ColorPolicy::Tolerant
        }
    }
}

/// The fixed, ordered list of all archetypes.
///
/// Built once at startup and never mutated. The distinct category list is
/// derived during construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<Archetype>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog, checking signature uniqueness and, under
    /// [`ColorPolicy::Strict`], every entry's colour.
    pub fn new(entries: Vec<Archetype>, policy: ColorPolicy) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
        for entry in &entries {
            if let Some(first) = seen.insert(&entry.payload_signature, &entry.name) {
                return Err(CatalogError::DuplicateSignature {
                    signature: entry.payload_signature.clone(),
                    first: first.to_string(),
                    second: entry.name.clone(),
                });
            }

            if let Err(source) = parse_hex(&entry.hex) {
                match policy {
                    ColorPolicy::Strict => {
                        return Err(CatalogError::InvalidColor {
                            name: entry.name.clone(),
                            source,
                        });
                    }
                    ColorPolicy::Tolerant => {
                        log::warn!(
                            "Archetype '{}' has an invalid colour, rendering with fallback: {source}",
                            entry.name
                        );
                    }
                }
            }
        }

        let categories = filter::categories(&entries);
        log::debug!(
            "Catalog built with {} archetypes in {} categories",
            entries.len(),
            categories.len() - 1
        );

        Ok(Self {
            entries,
            categories,
        })
    }

    pub fn entries(&self) -> &[Archetype] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `"All"` followed by the distinct categories in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look an entry up by its payload signature.
    pub fn get(&self, signature: &str) -> Option<&Archetype> {
        self.entries
            .iter()
            .find(|entry| entry.payload_signature == signature)
    }
}
