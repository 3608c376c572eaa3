use crate::components::archetype_grid::GridKeys;
use crate::components::base_popup::{PopupLayout, PopupStyle};
use crate::components::common::{GalleryActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::{Archetype, PointerTarget};
use tuirealm::command::{Cmd, CmdResult, Direction};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Position, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

const CLOSE_LABEL: &str = "[x]";
const PAGE_STEP: u16 = 10;

/// Placement of the detail panel and its close control over the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    panel: Rect,
    close: Rect,
}

impl ModalLayout {
    pub fn new(screen: Rect) -> Self {
        let panel = PopupLayout::large(screen);
        let close_width = CLOSE_LABEL.len() as u16;
        // Sits on the top border, one cell in from the right corner
        let close = Rect::new(
            panel.right().saturating_sub(close_width + 2),
            panel.y,
            close_width.min(panel.width),
            1.min(panel.height),
        );

        Self { panel, close }
    }

    pub fn panel(&self) -> Rect {
        self.panel
    }

    pub fn close_control(&self) -> Rect {
        self.close
    }

    /// What a pointer press at this cell lands on. The close control is
    /// checked before the panel it is drawn over.
    pub fn target_at(&self, column: u16, row: u16) -> PointerTarget {
        let position = Position::new(column, row);
        if self.close.contains(position) {
            PointerTarget::CloseControl
        } else if self.panel.contains(position) {
            PointerTarget::Panel
        } else {
            PointerTarget::Backdrop
        }
    }
}

/// Full detail view of one archetype, drawn over a dimmed backdrop.
pub struct ArchetypeModal {
    archetype: Archetype,
    scroll: u16,
    keys: GridKeys,
}

impl ArchetypeModal {
    pub fn new(archetype: Archetype, keys: GridKeys) -> Self {
        Self {
            archetype,
            scroll: 0,
            keys,
        }
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn section(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(ThemeManager::help_section_title())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
    }

    fn field(label: &str, value: impl Into<String>) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().fg(ThemeManager::text_muted()),
            ),
            Span::styled(
                value.into(),
                Style::default().fg(ThemeManager::text_primary()),
            ),
        ])
    }

    /// Body of the panel, one entry per rendered line.
    pub fn detail_lines(archetype: &Archetype) -> Vec<Line<'static>> {
        let palette = ThemeManager::card_palette(&archetype.hex);
        let hsl = archetype
            .hsl()
            .map(|hsl| hsl.to_string())
            .unwrap_or_else(|_| "unavailable".to_string());

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", archetype.category),
                    Style::default()
                        .fg(palette.badge_text)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    archetype.mood_tone.clone(),
                    Style::default()
                        .fg(ThemeManager::text_primary())
                        .add_modifier(Modifier::ITALIC),
                ),
            ]),
            Line::from(""),
            Self::section("Description"),
            Line::from(Span::styled(
                archetype.description.clone(),
                Style::default().fg(ThemeManager::text_primary()),
            )),
            Line::from(""),
            Self::section("Visual Identity"),
            Line::from(vec![
                Span::styled("Color: ", Style::default().fg(ThemeManager::text_muted())),
                Span::styled("██ ", Style::default().fg(palette.accent)),
                Span::styled(
                    archetype.hex.clone(),
                    Style::default().fg(ThemeManager::text_primary()),
                ),
            ]),
            Self::field("HSL", hsl),
            Self::field("Tone", archetype.tone().to_string()),
            Self::field("Visual arrival", archetype.visual_arrival.clone()),
            Line::from(""),
            Self::section("Audio & Animation"),
            Self::field("Soundtrack", archetype.soundtrack.clone()),
            Self::field("Accent animation", archetype.accent_animation.clone()),
            Self::field("Arrival style group", archetype.arrival_style_group.clone()),
            Line::from(""),
            Self::section("Technical Details"),
            Self::field("UI components", archetype.ui_components.clone()),
            Self::field("Payload signature", archetype.payload_signature.clone()),
            Line::from(""),
            Self::section("Sigils & Symbols"),
            Line::from(Span::styled(
                archetype.emoji_sigils.clone(),
                Style::default().fg(ThemeManager::text_primary()),
            )),
        ];

        if let Some(url) = &archetype.image_url {
            lines.push(Line::from(""));
            lines.push(Self::section("Visual Reference"));
            lines.push(Line::from(Span::styled(
                url.clone(),
                Style::default()
                    .fg(ThemeManager::status_info())
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }

        lines
    }
}

impl MockComponent for ArchetypeModal {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        // Dim everything behind the panel
        frame.render_widget(
            Block::default().style(Style::default().bg(ThemeManager::backdrop())),
            area,
        );

        let layout = ModalLayout::new(area);
        let panel = layout.panel();
        let sigil = self.archetype.primary_sigil().unwrap_or("◆");
        let style = PopupStyle::default();
        let block = style.block(format!(" {sigil} {} ", self.archetype.name));

        let body = Paragraph::new(Self::detail_lines(&self.archetype))
            .block(block)
            .style(Style::default().fg(style.text_color))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        frame.render_widget(Clear, panel);
        frame.render_widget(body, panel);
        frame.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_LABEL,
                Style::default()
                    .fg(ThemeManager::status_error())
                    .add_modifier(Modifier::BOLD),
            )),
            layout.close_control(),
        );
    }

    fn query(&self, _attr: Attribute) -> Option<AttrValue> {
        None
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::String(self.archetype.payload_signature.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        let previous = self.scroll;
        self.scroll = match cmd {
            Cmd::Scroll(Direction::Up) => self.scroll.saturating_sub(PAGE_STEP),
            Cmd::Scroll(Direction::Down) => self.scroll.saturating_add(PAGE_STEP),
            Cmd::Move(Direction::Up) => self.scroll.saturating_sub(1),
            Cmd::Move(Direction::Down) => self.scroll.saturating_add(1),
            Cmd::Cancel => {
                return CmdResult::Submit(State::None);
            }
            _ => return CmdResult::None,
        };
        // Rendering clamps an overscrolled paragraph to blank lines; keep it reachable
        let max_scroll = Self::detail_lines(&self.archetype).len() as u16;
        self.scroll = self.scroll.min(max_scroll.saturating_sub(1));

        if self.scroll == previous {
            CmdResult::None
        } else {
            CmdResult::Changed(State::One(StateValue::U16(self.scroll)))
        }
    }
}

impl Component<Msg, NoUserEvent> for ArchetypeModal {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd = match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Cmd::Cancel,
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => Cmd::Move(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => Cmd::Move(Direction::Down),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.keys.up => Cmd::Move(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if c == self.keys.down => Cmd::Move(Direction::Down),
            Event::Keyboard(KeyEvent {
                code: Key::PageUp, ..
            }) => Cmd::Scroll(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::PageDown,
                ..
            }) => Cmd::Scroll(Direction::Down),
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Submit(_) => Some(Msg::GalleryActivity(GalleryActivityMsg::CloseModal)),
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for ArchetypeModal {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!(
            "Opening detail view for {} ({})",
            self.archetype.name,
            self.archetype.payload_signature
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::archetype;
    use crate::config::keys::KeyBindingsConfig;

    fn default_keys() -> GridKeys {
        GridKeys::from(&KeyBindingsConfig::default())
    }

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_hit_targets() {
        // 100x40 screen puts the panel at (10, 4) sized 80x32
        let layout = ModalLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.panel(), Rect::new(10, 4, 80, 32));
        assert_eq!(layout.close_control(), Rect::new(85, 4, 3, 1));

        assert_eq!(layout.target_at(0, 0), PointerTarget::Backdrop);
        assert_eq!(layout.target_at(9, 20), PointerTarget::Backdrop);
        assert_eq!(layout.target_at(50, 36), PointerTarget::Backdrop);
        assert_eq!(layout.target_at(10, 4), PointerTarget::Panel);
        assert_eq!(layout.target_at(50, 20), PointerTarget::Panel);
        assert_eq!(layout.target_at(86, 4), PointerTarget::CloseControl);
        assert_eq!(layout.target_at(86, 5), PointerTarget::Panel);
    }

    #[test]
    fn test_detail_sections() {
        let entry = archetype("Lantern", "Wonder", "#FDE68A");
        let text = plain(&ArchetypeModal::detail_lines(&entry));

        for heading in [
            "Description",
            "Visual Identity",
            "Audio & Animation",
            "Technical Details",
            "Sigils & Symbols",
        ] {
            assert!(text.iter().any(|line| line == heading), "missing {heading}");
        }
        assert!(!text.iter().any(|line| line == "Visual Reference"));
        assert!(text.iter().any(|line| line == "HSL: 48 97% 77%"));
        assert!(text.iter().any(|line| line == "Tone: light"));
        assert!(text.iter().any(|line| line == "Payload signature: sig.lantern"));
    }

    #[test]
    fn test_visual_reference_only_with_image() {
        let mut entry = archetype("Lantern", "Wonder", "#FDE68A");
        entry.image_url = Some("https://example.com/lantern.png".to_string());
        let text = plain(&ArchetypeModal::detail_lines(&entry));

        assert!(text.iter().any(|line| line == "Visual Reference"));
        assert!(
            text.iter()
                .any(|line| line == "https://example.com/lantern.png")
        );
    }

    #[test]
    fn test_unparseable_colour_shows_placeholder() {
        let entry = archetype("Smudge", "Grief", "grey-ish");
        let text = plain(&ArchetypeModal::detail_lines(&entry));
        assert!(text.iter().any(|line| line == "HSL: unavailable"));
        assert!(text.iter().any(|line| line == "Tone: dark"));
    }

    #[test]
    fn test_escape_requests_close() {
        let mut modal =
            ArchetypeModal::new(archetype("Lantern", "Wonder", "#FDE68A"), default_keys());
        assert_eq!(
            modal.on(key(Key::Esc)),
            Some(Msg::GalleryActivity(GalleryActivityMsg::CloseModal))
        );
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let mut modal =
            ArchetypeModal::new(archetype("Lantern", "Wonder", "#FDE68A"), default_keys());
        assert_eq!(modal.on(key(Key::Up)), None);
        assert_eq!(modal.on(key(Key::Down)), Some(Msg::ForceRedraw));
        assert_eq!(modal.scroll(), 1);

        for _ in 0..10 {
            modal.on(key(Key::PageDown));
        }
        let lines = ArchetypeModal::detail_lines(modal.archetype()).len() as u16;
        assert_eq!(modal.scroll(), lines - 1);
        assert_eq!(modal.on(key(Key::Char('j'))), None);
    }

    #[test]
    fn test_rebound_keys_scroll() {
        let keys = GridKeys {
            up: 'w',
            down: 's',
            ..default_keys()
        };
        let mut modal = ArchetypeModal::new(archetype("Lantern", "Wonder", "#FDE68A"), keys);

        assert_eq!(modal.on(key(Key::Char('s'))), Some(Msg::ForceRedraw));
        assert_eq!(modal.scroll(), 1);
        assert_eq!(modal.on(key(Key::Char('j'))), None);
        assert_eq!(modal.scroll(), 1);
        assert_eq!(modal.on(key(Key::Char('w'))), Some(Msg::ForceRedraw));
        assert_eq!(modal.scroll(), 0);
    }
}
