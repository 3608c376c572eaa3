//! Plain-text and JSON renderings of a filtered catalog for `--list`.

use catalog::{Archetype, ResultSummary};
use serde::Serialize;

/// One row of `--list --json` output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedArchetype<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub mood_tone: &'a str,
    pub hex: &'a str,
    /// `"H S% L%"`, absent when the colour cannot be parsed
    pub hsl: Option<String>,
    pub tone: String,
    pub payload_signature: &'a str,
}

impl<'a> From<&'a Archetype> for ListedArchetype<'a> {
    fn from(archetype: &'a Archetype) -> Self {
        Self {
            name: &archetype.name,
            category: &archetype.category,
            mood_tone: &archetype.mood_tone,
            hex: &archetype.hex,
            hsl: archetype.hsl().ok().map(|hsl| hsl.to_string()),
            tone: archetype.tone().to_string(),
            payload_signature: &archetype.payload_signature,
        }
    }
}

/// Aligned table followed by the result summary line
pub fn render_table(entries: &[&Archetype], summary: &ResultSummary) -> String {
    let mut out = String::new();

    if summary.is_empty() {
        out.push_str(ResultSummary::EMPTY_TITLE);
        out.push('\n');
        out.push_str(ResultSummary::EMPTY_HINT);
        out.push('\n');
        return out;
    }

    let name_width = column_width(entries, "Name", |a| &a.name);
    let category_width = column_width(entries, "Category", |a| &a.category);
    let mood_width = column_width(entries, "Mood", |a| &a.mood_tone);

    out.push_str(&format!(
        "{:<name_width$}  {:<category_width$}  {:<mood_width$}  {:<12}  Tone\n",
        "Name", "Category", "Mood", "HSL"
    ));

    for archetype in entries {
        let listed = ListedArchetype::from(*archetype);
        out.push_str(&format!(
            "{:<name_width$}  {:<category_width$}  {:<mood_width$}  {:<12}  {}\n",
            listed.name,
            listed.category,
            listed.mood_tone,
            listed.hsl.as_deref().unwrap_or("-"),
            listed.tone
        ));
    }

    out.push('\n');
    out.push_str(&summary.to_string());
    out.push('\n');
    out
}

/// Pretty-printed JSON array of the entries
pub fn render_json(entries: &[&Archetype]) -> serde_json::Result<String> {
    let listed: Vec<ListedArchetype> = entries.iter().map(|a| ListedArchetype::from(*a)).collect();
    serde_json::to_string_pretty(&listed)
}

fn column_width(entries: &[&Archetype], header: &str, field: fn(&Archetype) -> &String) -> usize {
    entries
        .iter()
        .map(|a| field(a).chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
