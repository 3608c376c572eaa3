use crate::components::common::{GalleryActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const MAX_QUERY_LEN: usize = 100;
const PLACEHOLDER: &str = "Search by name, mood or description";

/// Free-text search box. Every edit is reported immediately so the grid
/// re-filters as the user types.
pub struct SearchBar {
    query: String,
    focused: bool,
}

impl SearchBar {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.query
    }

    fn changed(&self) -> Option<Msg> {
        Some(Msg::GalleryActivity(GalleryActivityMsg::QueryChanged(
            self.query.clone(),
        )))
    }
}

impl MockComponent for SearchBar {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            ThemeManager::primary_accent()
        } else {
            ThemeManager::text_muted()
        };

        let line = if self.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(ThemeManager::text_muted())
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.query.clone(),
                Style::default().fg(ThemeManager::text_primary()),
            )];
            if self.focused {
                spans.push(Span::styled(
                    "_",
                    Style::default()
                        .fg(ThemeManager::primary_accent())
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(" 🔍 Search ")
            .title_style(Style::default().fg(ThemeManager::header_accent()));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Focus => Some(AttrValue::Flag(self.focused)),
            Attribute::Value => Some(AttrValue::String(self.query.clone())),
            _ => None,
        }
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        match (attr, value) {
            (Attribute::Focus, AttrValue::Flag(focused)) => self.focused = focused,
            (Attribute::Value, AttrValue::String(query)) => self.query = query,
            _ => {}
        }
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.query.clone()))
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for SearchBar {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('u'),
                modifiers: KeyModifiers::CONTROL,
            }) => {
                if self.query.is_empty() {
                    return None;
                }
                self.query.clear();
                self.changed()
            }
            Event::Keyboard(KeyEvent {
                code: Key::Backspace,
                ..
            }) => {
                self.query.pop()?;
                self.changed()
            }
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers,
            }) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if self.query.chars().count() >= MAX_QUERY_LEN {
                    return None;
                }
                self.query.push(c);
                self.changed()
            }
            _ => None,
        }
    }
}

impl ComponentState for SearchBar {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting SearchBar with query '{}'", self.query);
        Ok(())
    }
}
