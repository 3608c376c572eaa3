use std::collections::HashMap;

/// Default base configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

/// Default theme files embedded in the binary, keyed by `<theme>/<flavor>.toml`
pub fn default_themes() -> HashMap<&'static str, &'static str> {
    let mut themes = HashMap::new();
    themes.insert(
        "moodji/dark.toml",
        include_str!("../../themes/moodji/dark.toml"),
    );
    themes.insert(
        "moodji/light.toml",
        include_str!("../../themes/moodji/light.toml"),
    );
    themes
}

/// Look up an embedded theme by name and flavor.
pub fn default_theme(theme_name: &str, flavor_name: &str) -> Option<&'static str> {
    default_themes()
        .get(format!("{theme_name}/{flavor_name}.toml").as_str())
        .copied()
}
