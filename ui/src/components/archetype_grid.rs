use crate::components::common::{GalleryActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::config::keys::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::{Archetype, ResultSummary};
use tuirealm::command::{Cmd, CmdResult, Direction, Position as CmdPosition};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::ratatui::layout::{Alignment, Position, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// Where each card of the grid is drawn for a given screen area.
///
/// Cards flow left to right in as many columns as fit the card width, and
/// the visible window of rows scrolls so the selected card is always shown.
/// The same layout answers which card sits under a mouse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    inner: Rect,
    columns: usize,
    rows_visible: usize,
    cell_width: u16,
    card_height: u16,
    first_row: usize,
    count: usize,
}

impl GridLayout {
    /// `area` is the bordered grid area; cards are placed inside the border.
    pub fn new(
        area: Rect,
        count: usize,
        card_width: u16,
        card_height: u16,
        selected: usize,
    ) -> Self {
        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        let card_width = card_width.max(1);
        let card_height = card_height.max(1);

        let columns = usize::from((inner.width / card_width).max(1));
        let cell_width = (inner.width / columns as u16).max(1);
        let rows_visible = usize::from((inner.height / card_height).max(1));

        let selected_row = selected.min(count.saturating_sub(1)) / columns;
        let first_row = selected_row.saturating_sub(rows_visible - 1);

        Self {
            inner,
            columns,
            rows_visible,
            cell_width,
            card_height,
            first_row,
            count,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Screen rectangle of a card, or `None` when it is scrolled out of view.
    pub fn card_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }

        let row = index / self.columns;
        if row < self.first_row || row >= self.first_row + self.rows_visible {
            return None;
        }

        let column = (index % self.columns) as u16;
        let x = self.inner.x + column * self.cell_width;
        let y = self.inner.y + (row - self.first_row) as u16 * self.card_height;
        let width = self.cell_width.min(self.inner.right().saturating_sub(x));
        let height = self.card_height.min(self.inner.bottom().saturating_sub(y));
        if width == 0 || height == 0 {
            return None;
        }

        Some(Rect::new(x, y, width, height))
    }

    /// Index of the card drawn at a screen cell, if any.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        if !self.inner.contains(position) {
            return None;
        }

        let grid_column = usize::from((column - self.inner.x) / self.cell_width);
        if grid_column >= self.columns {
            return None;
        }
        let grid_row = self.first_row + usize::from((row - self.inner.y) / self.card_height);
        let index = grid_row * self.columns + grid_column;

        self.card_rect(index)
            .filter(|rect| rect.contains(position))
            .map(|_| index)
    }
}

/// New selection after moving one step through a grid of `count` cards.
pub fn step_selection(selected: usize, count: usize, columns: usize, direction: Direction) -> usize {
    if count == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let last = count - 1;

    match direction {
        Direction::Left if selected % columns > 0 => selected - 1,
        Direction::Right if selected % columns + 1 < columns && selected < last => selected + 1,
        Direction::Up if selected >= columns => selected - columns,
        Direction::Down if selected + columns <= last => selected + columns,
        // Moving down into a shorter last row lands on its final card
        Direction::Down if selected / columns < last / columns => last,
        _ => selected,
    }
}

/// Single-character alternatives for grid actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridKeys {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub open: char,
    pub quit: char,
}

impl From<&KeyBindingsConfig> for GridKeys {
    fn from(keys: &KeyBindingsConfig) -> Self {
        Self {
            up: keys.up(),
            down: keys.down(),
            left: keys.left(),
            right: keys.right(),
            open: keys.open(),
            quit: keys.quit(),
        }
    }
}

pub struct ArchetypeGrid {
    entries: Vec<Archetype>,
    selected: usize,
    columns: usize,
    focused: bool,
    card_width: u16,
    card_height: u16,
    keys: GridKeys,
}

impl ArchetypeGrid {
    pub fn new(entries: Vec<Archetype>, card_width: u16, card_height: u16, keys: GridKeys) -> Self {
        Self {
            entries,
            selected: 0,
            columns: 1,
            focused: false,
            card_width,
            card_height,
            keys,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Archetype> {
        self.entries.get(self.selected)
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "🔮",
                Style::default().fg(ThemeManager::text_muted()),
            )),
            Line::from(Span::styled(
                ResultSummary::EMPTY_TITLE,
                Style::default()
                    .fg(ThemeManager::text_primary())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                ResultSummary::EMPTY_HINT,
                Style::default().fg(ThemeManager::text_muted()),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_card(frame: &mut Frame, area: Rect, archetype: &Archetype, is_selected: bool) {
        let palette = ThemeManager::card_palette(&archetype.hex);

        let (border_type, border_style) = if is_selected {
            (
                BorderType::Thick,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(palette.accent))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(palette.background));

        let text_style = Style::default().fg(palette.text);
        let sigil = archetype.primary_sigil().unwrap_or("◆");

        let lines = vec![
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(palette.accent)),
                Span::styled(
                    format!(" {} ", archetype.category),
                    Style::default()
                        .fg(palette.badge_text)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("{sigil} {}", archetype.name),
                text_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                archetype.mood_tone.clone(),
                text_style.add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(archetype.emoji_sigils.clone(), text_style)),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn activate(&self) -> CmdResult {
        match self.selected_entry() {
            Some(entry) => CmdResult::Submit(State::One(StateValue::String(
                entry.payload_signature.clone(),
            ))),
            None => CmdResult::None,
        }
    }

    fn char_command(&self, c: char) -> Option<Cmd> {
        let keys = self.keys;
        if c == keys.up {
            Some(Cmd::Move(Direction::Up))
        } else if c == keys.down {
            Some(Cmd::Move(Direction::Down))
        } else if c == keys.left {
            Some(Cmd::Move(Direction::Left))
        } else if c == keys.right {
            Some(Cmd::Move(Direction::Right))
        } else if c == keys.open {
            Some(Cmd::Submit)
        } else {
            None
        }
    }
}

impl MockComponent for ArchetypeGrid {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            ThemeManager::primary_accent()
        } else {
            ThemeManager::text_muted()
        };
        let title = if self.entries.is_empty() {
            " Archetypes ".to_string()
        } else {
            format!(" Archetypes {}/{} ", self.selected + 1, self.entries.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(Style::default().fg(ThemeManager::header_accent()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.entries.is_empty() {
            self.render_empty(frame, inner);
            return;
        }

        let layout = GridLayout::new(
            area,
            self.entries.len(),
            self.card_width,
            self.card_height,
            self.selected,
        );
        self.columns = layout.columns();

        for (index, archetype) in self.entries.iter().enumerate() {
            if let Some(rect) = layout.card_rect(index) {
                Self::render_card(frame, rect, archetype, index == self.selected);
            }
        }
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
        let count = self.entries.len();
        let previous = self.selected;

        match cmd {
            Cmd::Move(direction) => {
                self.selected = step_selection(self.selected, count, self.columns, direction);
            }
            Cmd::GoTo(CmdPosition::Begin) => self.selected = 0,
            Cmd::GoTo(CmdPosition::End) => self.selected = count.saturating_sub(1),
            Cmd::Submit => return self.activate(),
            _ => return CmdResult::None,
        }

        if self.selected == previous {
            CmdResult::None
        } else {
            CmdResult::Changed(self.state())
        }
    }
}

impl Component<Msg, NoUserEvent> for ArchetypeGrid {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let cmd = match ev {
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => Cmd::Move(Direction::Up),
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => Cmd::Move(Direction::Down),
            Event::Keyboard(KeyEvent {
                code: Key::Left, ..
            }) => Cmd::Move(Direction::Left),
            Event::Keyboard(KeyEvent {
                code: Key::Right, ..
            }) => Cmd::Move(Direction::Right),
            Event::Keyboard(KeyEvent {
                code: Key::Home, ..
            }) => Cmd::GoTo(CmdPosition::Begin),
            Event::Keyboard(KeyEvent { code: Key::End, .. }) => Cmd::GoTo(CmdPosition::End),
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Cmd::Submit,
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) => {
                if c == self.keys.quit {
                    return Some(Msg::AppClose);
                }
                self.char_command(c)?
            }
            _ => return None,
        };

        match self.perform(cmd) {
            CmdResult::Submit(State::One(StateValue::String(signature))) => Some(
                Msg::GalleryActivity(GalleryActivityMsg::CardSelected(signature)),
            ),
            CmdResult::Changed(_) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for ArchetypeGrid {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting ArchetypeGrid with {} cards", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::archetypes;

    const KEYS: GridKeys = GridKeys {
        up: 'k',
        down: 'j',
        left: 'h',
        right: 'l',
        open: 'o',
        quit: 'q',
    };

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    // 62x16 leaves a 60x14 interior: two 30-wide columns, two 7-high rows
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 62,
        height: 16,
    };

    #[test]
    fn test_layout_places_cards_inside_border() {
        let layout = GridLayout::new(AREA, 5, 30, 7, 0);
        assert_eq!(layout.columns(), 2);
        assert_eq!(layout.card_rect(0), Some(Rect::new(1, 1, 30, 7)));
        assert_eq!(layout.card_rect(3), Some(Rect::new(31, 8, 30, 7)));
        // Third row is below the fold
        assert_eq!(layout.card_rect(4), None);
        assert_eq!(layout.card_rect(5), None);
    }

    #[test]
    fn test_layout_scrolls_to_selection() {
        let layout = GridLayout::new(AREA, 5, 30, 7, 4);
        assert_eq!(layout.card_rect(0), None);
        assert_eq!(layout.card_rect(2), Some(Rect::new(1, 1, 30, 7)));
        assert_eq!(layout.card_rect(4), Some(Rect::new(1, 8, 30, 7)));
    }

    #[test]
    fn test_card_hit_testing() {
        let layout = GridLayout::new(AREA, 5, 30, 7, 0);
        assert_eq!(layout.card_at(5, 3), Some(0));
        assert_eq!(layout.card_at(40, 10), Some(3));
        // Border cells and cells past the last card
        assert_eq!(layout.card_at(0, 0), None);
        assert_eq!(layout.card_at(61, 15), None);

        let scrolled = GridLayout::new(AREA, 5, 30, 7, 4);
        assert_eq!(scrolled.card_at(5, 3), Some(2));
        assert_eq!(scrolled.card_at(40, 10), None);
    }

    #[test]
    fn test_narrow_area_uses_one_column() {
        let layout = GridLayout::new(Rect::new(0, 0, 12, 30), 3, 30, 7, 0);
        assert_eq!(layout.columns(), 1);
        assert_eq!(layout.card_rect(1), Some(Rect::new(1, 8, 10, 7)));
    }

    #[test]
    fn test_step_selection() {
        // 3 columns, 7 cards: rows [0 1 2] [3 4 5] [6]
        assert_eq!(step_selection(0, 7, 3, Direction::Left), 0);
        assert_eq!(step_selection(1, 7, 3, Direction::Left), 0);
        assert_eq!(step_selection(2, 7, 3, Direction::Right), 2);
        assert_eq!(step_selection(4, 7, 3, Direction::Up), 1);
        assert_eq!(step_selection(1, 7, 3, Direction::Up), 1);
        assert_eq!(step_selection(2, 7, 3, Direction::Down), 5);
        assert_eq!(step_selection(5, 7, 3, Direction::Down), 6);
        assert_eq!(step_selection(6, 7, 3, Direction::Down), 6);
        assert_eq!(step_selection(6, 7, 3, Direction::Right), 6);
        assert_eq!(step_selection(0, 0, 3, Direction::Down), 0);
    }

    #[test]
    fn test_enter_opens_selected_card() {
        let mut grid = ArchetypeGrid::new(archetypes(3), 30, 7, KEYS);
        assert_eq!(grid.on(key(Key::Down)), Some(Msg::ForceRedraw));
        assert_eq!(grid.selected_index(), 1);
        assert_eq!(
            grid.on(key(Key::Enter)),
            Some(Msg::GalleryActivity(GalleryActivityMsg::CardSelected(
                "sig.entry-1".to_string()
            )))
        );
        assert_eq!(
            grid.on(key(Key::Char('o'))),
            Some(Msg::GalleryActivity(GalleryActivityMsg::CardSelected(
                "sig.entry-1".to_string()
            )))
        );
    }

    #[test]
    fn test_configured_keys_navigate() {
        let mut grid = ArchetypeGrid::new(archetypes(3), 30, 7, KEYS);
        assert_eq!(grid.on(key(Key::Char('j'))), Some(Msg::ForceRedraw));
        assert_eq!(grid.on(key(Key::Char('j'))), Some(Msg::ForceRedraw));
        assert_eq!(grid.selected_index(), 2);
        // Already at the bottom
        assert_eq!(grid.on(key(Key::Char('j'))), None);
        assert_eq!(grid.on(key(Key::Home)), Some(Msg::ForceRedraw));
        assert_eq!(grid.selected_index(), 0);
        assert_eq!(grid.on(key(Key::Char('z'))), None);
    }

    #[test]
    fn test_quit_key_closes_app() {
        let mut grid = ArchetypeGrid::new(archetypes(1), 30, 7, KEYS);
        assert_eq!(grid.on(key(Key::Char('q'))), Some(Msg::AppClose));
    }

    #[test]
    fn test_empty_grid_opens_nothing() {
        let mut grid = ArchetypeGrid::new(Vec::new(), 30, 7, KEYS);
        assert_eq!(grid.on(key(Key::Enter)), None);
        assert_eq!(grid.on(key(Key::End)), None);
        assert!(grid.selected_entry().is_none());
    }
}
