use crate::app::view::ScreenLayout;
use crate::components::common::{ComponentId, FocusActivityMsg};

/// Components that take part in Tab / Shift+Tab focus cycling, in order.
pub const FOCUS_ORDER: [ComponentId; 3] = [
    ComponentId::SearchBar,
    ComponentId::CategoryPicker,
    ComponentId::ArchetypeGrid,
];

/// The gallery component focused when the application starts
pub const INITIAL_FOCUS: ComponentId = ComponentId::ArchetypeGrid;

/// Component that receives focus after `current` for a focus step.
///
/// Components outside [`FOCUS_ORDER`] restart the cycle at its first entry.
pub fn next_focus(current: &ComponentId, step: FocusActivityMsg) -> ComponentId {
    let Some(position) = FOCUS_ORDER.iter().position(|id| id == current) else {
        return FOCUS_ORDER[0].clone();
    };

    let len = FOCUS_ORDER.len();
    let next = match step {
        FocusActivityMsg::Next => (position + 1) % len,
        FocusActivityMsg::Previous => (position + len - 1) % len,
    };
    FOCUS_ORDER[next].clone()
}

/// Tracks UI-level state: focus, redraw and quit flags, and the last drawn
/// screen layout used to resolve mouse clicks.
pub struct StateManager {
    pub active_component: ComponentId,
    pub quit: bool,
    pub redraw: bool,
    pub layout: Option<ScreenLayout>,
}

impl StateManager {
    pub fn new() -> Self {
        Self {
            active_component: INITIAL_FOCUS,
            quit: false,
            redraw: true,
            layout: None,
        }
    }

    /// Set the focused gallery component
    pub fn set_active_component(&mut self, component: ComponentId) {
        log::debug!(
            "Focus change: {:?} -> {:?}",
            self.active_component,
            component
        );
        self.active_component = component;
        self.redraw = true;
    }

    /// Signal application shutdown
    pub fn shutdown(&mut self) {
        self.quit = true;
    }

    /// Check if application should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Check if redraw is needed
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Set redraw flag
    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    /// Mark redraw as complete
    pub fn redraw_complete(&mut self) {
        self.redraw = false;
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward_and_wraps() {
        assert_eq!(
            next_focus(&ComponentId::SearchBar, FocusActivityMsg::Next),
            ComponentId::CategoryPicker
        );
        assert_eq!(
            next_focus(&ComponentId::CategoryPicker, FocusActivityMsg::Next),
            ComponentId::ArchetypeGrid
        );
        assert_eq!(
            next_focus(&ComponentId::ArchetypeGrid, FocusActivityMsg::Next),
            ComponentId::SearchBar
        );
    }

    #[test]
    fn test_focus_cycles_backward_and_wraps() {
        assert_eq!(
            next_focus(&ComponentId::SearchBar, FocusActivityMsg::Previous),
            ComponentId::ArchetypeGrid
        );
        assert_eq!(
            next_focus(&ComponentId::ArchetypeGrid, FocusActivityMsg::Previous),
            ComponentId::CategoryPicker
        );
    }

    #[test]
    fn test_focus_from_outside_cycle_restarts() {
        assert_eq!(
            next_focus(&ComponentId::ArchetypeModal, FocusActivityMsg::Previous),
            ComponentId::SearchBar
        );
    }

    #[test]
    fn test_state_manager_flags() {
        let mut state = StateManager::new();
        assert_eq!(state.active_component, INITIAL_FOCUS);
        assert!(state.needs_redraw());
        state.redraw_complete();
        assert!(!state.needs_redraw());

        state.set_active_component(ComponentId::SearchBar);
        assert!(state.needs_redraw());

        assert!(!state.should_quit());
        state.shutdown();
        assert!(state.should_quit());
    }
}
