use crate::components::common::{FocusActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::error::AppResult;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible subscriber that sees every event regardless of focus. Handles
/// the quit chord, focus cycling, mouse presses and terminal resizes.
#[derive(MockComponent, Default)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    quit_key: char,
}

impl GlobalKeyWatcher {
    pub fn new(quit_key: char) -> Self {
        Self {
            component: Phantom::default(),
            quit_key,
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers,
            }) if modifiers.contains(KeyModifiers::CONTROL)
                && (c == self.quit_key || c == 'c') =>
            {
                Some(Msg::AppClose)
            }
            Event::Keyboard(KeyEvent { code: Key::Tab, .. }) => {
                Some(Msg::FocusActivity(FocusActivityMsg::Next))
            }
            Event::Keyboard(KeyEvent {
                code: Key::BackTab,
                ..
            }) => Some(Msg::FocusActivity(FocusActivityMsg::Previous)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Msg::PointerDown { column, row }),
            Event::WindowResize(_, _) => Some(Msg::ForceRedraw),
            _ => None,
        }
    }
}

impl ComponentState for GlobalKeyWatcher {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Global key watcher active, quit chord Ctrl+{}", self.quit_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: Key, modifiers: KeyModifiers) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_chord() {
        let mut watcher = GlobalKeyWatcher::new('q');
        assert_eq!(
            watcher.on(key(Key::Char('q'), KeyModifiers::CONTROL)),
            Some(Msg::AppClose)
        );
        assert_eq!(
            watcher.on(key(Key::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::AppClose)
        );
        // The bare key belongs to whichever component has focus
        assert_eq!(watcher.on(key(Key::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_configured_quit_key() {
        let mut watcher = GlobalKeyWatcher::new('x');
        assert_eq!(
            watcher.on(key(Key::Char('x'), KeyModifiers::CONTROL)),
            Some(Msg::AppClose)
        );
        assert_eq!(watcher.on(key(Key::Char('q'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_focus_cycling_keys() {
        let mut watcher = GlobalKeyWatcher::new('q');
        assert_eq!(
            watcher.on(key(Key::Tab, KeyModifiers::NONE)),
            Some(Msg::FocusActivity(FocusActivityMsg::Next))
        );
        assert_eq!(
            watcher.on(key(Key::BackTab, KeyModifiers::SHIFT)),
            Some(Msg::FocusActivity(FocusActivityMsg::Previous))
        );
    }

    #[test]
    fn test_left_click_reports_position() {
        let mut watcher = GlobalKeyWatcher::new('q');
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
            column: 12,
            row: 7,
        });
        assert_eq!(
            watcher.on(click),
            Some(Msg::PointerDown { column: 12, row: 7 })
        );

        let right_click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            modifiers: KeyModifiers::NONE,
            column: 12,
            row: 7,
        });
        assert_eq!(watcher.on(right_click), None);
    }

    #[test]
    fn test_resize_redraws() {
        let mut watcher = GlobalKeyWatcher::new('q');
        assert_eq!(
            watcher.on(Event::WindowResize(80, 24)),
            Some(Msg::ForceRedraw)
        );
    }
}
