use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    props::{Alignment, Color, TextModifiers},
};

use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::error::AppResult;
use crate::theme::ThemeManager;

/// Single line of centered, non-interactive text
#[derive(MockComponent)]
pub struct TextLabel {
    component: Label,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, foreground: Color) -> Self {
        let component = Label::default()
            .text(text.into())
            .alignment(Alignment::Center)
            .foreground(foreground)
            .background(Color::Reset)
            .modifiers(TextModifiers::BOLD);

        Self { component }
    }

    pub fn title(text: impl Into<String>) -> Self {
        Self::new(text, ThemeManager::title_accent())
    }

    pub fn summary(text: impl Into<String>) -> Self {
        Self::new(text, ThemeManager::help_section_title())
    }
}

impl Component<Msg, NoUserEvent> for TextLabel {
    fn on(&mut self, _: Event<NoUserEvent>) -> Option<Msg> {
        None
    }
}

impl ComponentState for TextLabel {
    fn mount(&mut self) -> AppResult<()> {
        Ok(())
    }
}
