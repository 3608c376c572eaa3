use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::{AppError, AppResult};
use tuirealm::{
    AttrValue, Attribute, Component, Event, MockComponent, NoUserEvent, State,
    command::{Cmd, CmdResult},
    event::{Key, KeyEvent},
    ratatui::{Frame, layout::Rect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Error,
    Warning,
}

/// Dismissable popup showing an error or warning reported through the
/// error reporter. Enter or Esc closes it.
pub struct ErrorPopup {
    kind: PopupKind,
    message: String,
    is_mounted: bool,
}

impl ErrorPopup {
    pub fn new(error: &AppError) -> Self {
        // ErrorReporter already formats the message for display
        Self {
            kind: PopupKind::Error,
            message: error.to_string(),
            is_mounted: false,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Warning,
            message: message.into(),
            is_mounted: false,
        }
    }

    pub fn kind(&self) -> PopupKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let builder = match self.kind {
            PopupKind::Error => PopupBuilder::error("❌ Error"),
            PopupKind::Warning => PopupBuilder::warning("⚠️ Warning"),
        };

        builder
            .add_multiline_text(self.message.clone())
            .add_empty_line()
            .with_instructions("[Enter/Esc] Close")
            .render(frame, area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Text => Some(AttrValue::String(self.message.clone())),
            _ => None,
        }
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> AppResult<()> {
        if self.is_mounted {
            log::warn!("ErrorPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        log::debug!("ErrorPopup mounted ({:?})", self.kind);
        Ok(())
    }
}

impl Drop for ErrorPopup {
    fn drop(&mut self) {
        log::debug!("Dropping ErrorPopup component");
        self.is_mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuirealm::event::KeyModifiers;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_enter_and_esc_close() {
        let mut popup = ErrorPopup::new(&AppError::Catalog("broken".to_string()));
        assert_eq!(
            popup.on(key(Key::Enter)),
            Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
        );
        assert_eq!(
            popup.on(key(Key::Esc)),
            Some(Msg::PopupActivity(PopupActivityMsg::CloseError))
        );
        assert_eq!(popup.on(key(Key::Char('x'))), None);
    }

    #[test]
    fn test_message_and_kind() {
        let popup = ErrorPopup::new(&AppError::Config("bad key".to_string()));
        assert_eq!(popup.kind(), PopupKind::Error);
        assert!(popup.message().contains("bad key"));

        let warning = ErrorPopup::warning("3 archetypes use fallback colours");
        assert_eq!(warning.kind(), PopupKind::Warning);
        assert_eq!(warning.message(), "3 archetypes use fallback colours");
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut popup = ErrorPopup::warning("careful");
        assert!(popup.mount().is_ok());
        assert!(popup.mount().is_ok());
    }
}
