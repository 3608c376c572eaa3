//! Search and category filtering over the catalog.

use crate::model::Archetype;
use std::fmt;

/// Sentinel category that matches every archetype.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection for [`filter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, archetype: &Archetype) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => archetype.category == *category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match against name, mood tone and description.
///
/// `needle` must already be lowercased. An empty needle matches everything.
pub fn matches_text(archetype: &Archetype, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &archetype.name,
        &archetype.mood_tone,
        &archetype.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Entries matching both the text query and the category, in catalog order.
pub fn filter<'a>(
    entries: &'a [Archetype],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Archetype> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|archetype| matches_text(archetype, &needle) && category.matches(archetype))
        .collect()
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn categories(entries: &[Archetype]) -> Vec<String> {
    let mut list = vec![ALL_CATEGORIES.to_string()];
    for archetype in entries {
        if !list.iter().any(|c| *c == archetype.category) {
            list.push(archetype.category.clone());
        }
    }
    list
}
