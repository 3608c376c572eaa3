use crate::components::common::{GalleryActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use catalog::CategoryFilter;
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Tabs};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CMD_RESULT_CATEGORY_SELECTED: &str = "CategorySelected";

/// Horizontal strip of category tabs. The first tab is always "All".
pub struct CategoryPicker {
    categories: Vec<String>,
    selected: usize,
    focused: bool,
    left_key: char,
    right_key: char,
}

impl CategoryPicker {
    /// `categories` is the catalog's category list; `current` is preselected
    /// when present and "All" otherwise.
    pub fn new(
        categories: Vec<String>,
        current: &CategoryFilter,
        left_key: char,
        right_key: char,
    ) -> Self {
        let selected = categories
            .iter()
            .position(|category| category == current.as_str())
            .unwrap_or(0);

        Self {
            categories,
            selected,
            focused: false,
            left_key,
            right_key,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.selected).map(String::as_str)
    }

    fn step(&mut self, direction: Direction) -> CmdResult {
        let count = self.categories.len();
        if count < 2 {
            return CmdResult::None;
        }

        self.selected = match direction {
            Direction::Left => (self.selected + count - 1) % count,
            Direction::Right => (self.selected + 1) % count,
            _ => return CmdResult::None,
        };

        match self.selected_category() {
            Some(category) => CmdResult::Custom(
                CMD_RESULT_CATEGORY_SELECTED,
                State::One(StateValue::String(category.to_string())),
            ),
            None => CmdResult::None,
        }
    }
}

impl MockComponent for CategoryPicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            ThemeManager::primary_accent()
        } else {
            ThemeManager::text_muted()
        };

        let tabs = Tabs::new(self.categories.iter().map(String::as_str))
            .select(self.selected)
            .style(Style::default().fg(ThemeManager::text_muted()))
            .highlight_style(
                Style::default()
                    .fg(ThemeManager::selection_fg())
                    .bg(ThemeManager::selection_bg())
                    .add_modifier(Modifier::BOLD),
            )
            .divider("·")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .title(" 🏷  Category ")
                    .title_style(Style::default().fg(ThemeManager::header_accent())),
            );

        frame.render_widget(tabs, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        if let (Attribute::Focus, AttrValue::Flag(focused)) = (attr, value) {
            self.focused = focused;
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(direction) => self.step(direction),
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for CategoryPicker {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd_result = match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Left, ..
            }) => self.perform(Cmd::Move(Direction::Left)),
            Event::Keyboard(KeyEvent {
                code: Key::Right, ..
            }) => self.perform(Cmd::Move(Direction::Right)),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.left_key => self.perform(Cmd::Move(Direction::Left)),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.right_key => self.perform(Cmd::Move(Direction::Right)),
            _ => CmdResult::None,
        };

        match cmd_result {
            CmdResult::Custom(CMD_RESULT_CATEGORY_SELECTED, state) => {
                if let State::One(StateValue::String(category)) = state {
                    Some(Msg::GalleryActivity(GalleryActivityMsg::CategorySelected(
                        category,
                    )))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl ComponentState for CategoryPicker {
    fn mount(&mut self) -> AppResult<()> {
        if self.categories.is_empty() {
            return Err(AppError::State(
                "Category picker needs at least the \"All\" category".to_string(),
            ));
        }
        log::debug!(
            "Mounting CategoryPicker with {} categories",
            self.categories.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    fn picker(current: &str) -> CategoryPicker {
        CategoryPicker::new(
            vec!["All".to_string(), "Joy".to_string(), "Grief".to_string()],
            &CategoryFilter::from(current),
            'h',
            'l',
        )
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn selected(category: &str) -> Option<Msg> {
        Some(Msg::GalleryActivity(GalleryActivityMsg::CategorySelected(
            category.to_string(),
        )))
    }

    #[test]
    fn test_preselects_current_category() {
        assert_eq!(picker("Grief").selected_category(), Some("Grief"));
        assert_eq!(picker("All").selected_category(), Some("All"));
        // Unknown categories fall back to "All"
        assert_eq!(picker("Wonder").selected_category(), Some("All"));
    }

    #[test]
    fn test_arrows_cycle_with_wraparound() {
        let mut picker = picker("All");
        assert_eq!(picker.on(key(Key::Right)), selected("Joy"));
        assert_eq!(picker.on(key(Key::Right)), selected("Grief"));
        assert_eq!(picker.on(key(Key::Right)), selected("All"));
        assert_eq!(picker.on(key(Key::Left)), selected("Grief"));
    }

    #[test]
    fn test_configured_keys_cycle() {
        let mut picker = picker("Joy");
        assert_eq!(picker.on(key(Key::Char('h'))), selected("All"));
        assert_eq!(picker.on(key(Key::Char('l'))), selected("Joy"));
        assert_eq!(picker.on(key(Key::Char('x'))), None);
    }

    #[test]
    fn test_single_category_does_not_move() {
        let mut picker =
            CategoryPicker::new(vec!["All".to_string()], &CategoryFilter::All, 'h', 'l');
        assert_eq!(picker.on(key(Key::Right)), None);
        assert_ok!(picker.mount());
    }

    #[test]
    fn test_mount_requires_categories() {
        let mut picker = CategoryPicker::new(Vec::new(), &CategoryFilter::All, 'h', 'l');
        assert_err!(picker.mount());
    }
}
