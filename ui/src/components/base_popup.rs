use crate::theme::ThemeManager;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Common popup styling
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
    pub background: Color,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            border_color: ThemeManager::primary_accent(),
            title_color: ThemeManager::title_accent(),
            text_color: ThemeManager::popup_text(),
            muted_color: ThemeManager::text_muted(),
            background: ThemeManager::popup_background(),
        }
    }
}

impl PopupStyle {
    pub fn error() -> Self {
        Self {
            border_color: ThemeManager::status_error(),
            title_color: ThemeManager::status_error(),
            ..Self::default()
        }
    }

    pub fn warning() -> Self {
        Self {
            border_color: ThemeManager::status_warning(),
            title_color: ThemeManager::status_warning(),
            ..Self::default()
        }
    }

    /// Rounded bordered block with a centered bold title
    pub fn block(&self, title: impl Into<String>) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color))
            .title(title.into())
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(self.background))
    }
}

/// Builder for simple centered text popups
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn error(title: impl Into<String>) -> Self {
        Self::with_style(title, PopupStyle::error())
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_style(title, PopupStyle::warning())
    }

    fn with_style(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
        }
    }

    pub fn add_empty_line(mut self) -> Self {
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        for line in text.into().lines() {
            self.content_lines.push(Line::from(line.to_string()));
        }
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = self.style.block(format!(" {} ", self.title));

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.style.muted_color),
            )));
        }

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(Style::default().fg(self.style.text_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Common popup sizing utilities
pub struct PopupLayout;

impl PopupLayout {
    /// Centered area covering the given percentage of `area`
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (u32::from(area.width) * u32::from(width_percent) / 100) as u16;
        let popup_height = (u32::from(area.height) * u32::from(height_percent) / 100) as u16;

        let x = (area.width.saturating_sub(popup_width)) / 2;
        let y = (area.height.saturating_sub(popup_height)) / 2;

        Rect {
            x: area.x + x,
            y: area.y + y,
            width: popup_width,
            height: popup_height,
        }
    }

    /// 60% width, 50% height
    pub fn medium(area: Rect) -> Rect {
        Self::centered(area, 60, 50)
    }

    /// 80% width, 80% height
    pub fn large(area: Rect) -> Rect {
        Self::centered(area, 80, 80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuirealm::ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(builder: PopupBuilder) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| builder.render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_builder_renders_every_part() {
        let text = rendered_text(
            PopupBuilder::warning("Heads up")
                .add_multiline_text("first line\nsecond line")
                .add_empty_line()
                .with_instructions("Press Esc"),
        );

        for expected in ["Heads up", "first line", "second line", "Press Esc"] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_centered_popup_stays_inside_area() {
        let screen = Rect::new(0, 0, 100, 40);
        let popup = PopupLayout::large(screen);
        assert_eq!(popup, Rect::new(10, 4, 80, 32));
        assert_eq!(screen.intersection(popup), popup);
    }

    #[test]
    fn test_centered_popup_respects_offset() {
        let area = Rect::new(5, 3, 50, 20);
        let popup = PopupLayout::medium(area);
        assert_eq!(popup, Rect::new(15, 8, 30, 10));
    }

    #[test]
    fn test_very_wide_screen_does_not_overflow() {
        let screen = Rect::new(0, 0, 1000, 300);
        let popup = PopupLayout::large(screen);
        assert_eq!(popup, Rect::new(100, 30, 800, 240));
    }

    #[test]
    fn test_tiny_area_does_not_underflow() {
        let popup = PopupLayout::large(Rect::new(0, 0, 1, 1));
        assert_eq!(popup.width, 0);
        assert_eq!(popup.height, 0);
    }
}
