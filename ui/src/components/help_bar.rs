use tuirealm::props::Alignment;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::Style;
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::Frame;

use crate::components::common::ComponentId;
use crate::config::keys::KeyBindingsConfig;
use crate::theme::ThemeManager;

/// Bottom line listing the shortcuts that apply to the focused component
pub struct HelpBar {
    keys: KeyBindingsConfig,
}

impl HelpBar {
    pub fn new(keys: &KeyBindingsConfig) -> Self {
        Self { keys: keys.clone() }
    }

    fn global_shortcuts(&self) -> Vec<(String, bool)> {
        vec![
            ("[Tab]".to_string(), true),
            (" Next ".to_string(), false),
            (format!("[Ctrl+{}]", self.keys.quit()), true),
            (" Quit".to_string(), false),
        ]
    }

    /// Shortcut/description pairs; `true` marks the key half of a pair
    pub fn shortcuts(&self, active_component: &ComponentId) -> Vec<(String, bool)> {
        let keys = &self.keys;
        let mut shortcuts = match active_component {
            ComponentId::SearchBar => vec![
                ("[type]".to_string(), true),
                (" Search ".to_string(), false),
                ("[Ctrl+U]".to_string(), true),
                (" Clear ".to_string(), false),
            ],
            ComponentId::CategoryPicker => vec![
                (format!("[←/{}]", keys.left()), true),
                (" Previous ".to_string(), false),
                (format!("[→/{}]", keys.right()), true),
                (" Next category ".to_string(), false),
            ],
            ComponentId::ArchetypeGrid => vec![
                ("[←↑↓→]".to_string(), true),
                (
                    format!(
                        " or {}{}{}{} Move ",
                        keys.left(),
                        keys.up(),
                        keys.down(),
                        keys.right()
                    ),
                    false,
                ),
                (format!("[Enter/{}]", keys.open()), true),
                (" Details ".to_string(), false),
                (format!("[{}]", keys.quit()), true),
                (" Quit ".to_string(), false),
            ],
            // The modal and popups replace the global shortcuts entirely
            ComponentId::ArchetypeModal => {
                return vec![
                    ("[↑/↓]".to_string(), true),
                    (" Scroll ".to_string(), false),
                    ("[Esc]".to_string(), true),
                    (" Close ".to_string(), false),
                    ("[click outside]".to_string(), true),
                    (" Close".to_string(), false),
                ];
            }
            ComponentId::ErrorPopup => {
                return vec![
                    ("[Enter/Esc]".to_string(), true),
                    (" Close".to_string(), false),
                ];
            }
            _ => Vec::new(),
        };

        shortcuts.extend(self.global_shortcuts());
        shortcuts
    }

    pub fn view_with_active(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        active_component: &ComponentId,
    ) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (text, highlight)) in self.shortcuts(active_component).into_iter().enumerate() {
            if i > 0 && i % 2 == 0 {
                spans.push(Span::styled(
                    " │ ",
                    Style::default().fg(ThemeManager::text_muted()),
                ));
            }

            let color = if highlight {
                ThemeManager::shortcut_key()
            } else {
                ThemeManager::shortcut_description()
            };
            spans.push(Span::styled(text, Style::default().fg(color)));
        }

        let paragraph = Paragraph::new(Text::from(Line::from(spans)))
            .style(Style::default().bg(ThemeManager::surface()))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(shortcuts: &[(String, bool)]) -> Vec<&str> {
        shortcuts
            .iter()
            .filter(|(_, key)| *key)
            .map(|(text, _)| text.as_str())
            .collect()
    }

    #[test]
    fn test_grid_shortcuts_use_configured_keys() {
        let bar = HelpBar::new(&KeyBindingsConfig::default());
        let shortcuts = bar.shortcuts(&ComponentId::ArchetypeGrid);
        assert_eq!(
            labels(&shortcuts),
            vec!["[←↑↓→]", "[Enter/o]", "[q]", "[Tab]", "[Ctrl+q]"]
        );
        // Every key is followed by its description
        assert_eq!(shortcuts.len() % 2, 0);
    }

    #[test]
    fn test_modal_hides_global_shortcuts() {
        let bar = HelpBar::new(&KeyBindingsConfig::default());
        let shortcuts = bar.shortcuts(&ComponentId::ArchetypeModal);
        assert!(labels(&shortcuts).contains(&"[Esc]"));
        assert!(!labels(&shortcuts).contains(&"[Tab]"));
    }

    #[test]
    fn test_unknown_component_shows_globals_only() {
        let bar = HelpBar::new(&KeyBindingsConfig::default());
        assert_eq!(
            labels(&bar.shortcuts(&ComponentId::Title)),
            vec!["[Tab]", "[Ctrl+q]"]
        );
    }
}
