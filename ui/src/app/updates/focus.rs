use crate::app::managers::state_manager::next_focus;
use crate::app::model::Model;
use crate::components::common::{ComponentId, FocusActivityMsg, Msg};
use crate::error::AppError;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_focus(&mut self, msg: FocusActivityMsg) -> Option<Msg> {
        let next = next_focus(&self.state_manager.active_component, msg);
        self.focus_component(next)
    }

    /// Move keyboard focus to a gallery component. Ignored while the detail
    /// modal or an error popup owns the keyboard.
    pub fn focus_component(&mut self, component: ComponentId) -> Option<Msg> {
        if self.app.mounted(&ComponentId::ErrorPopup)
            || self.app.mounted(&ComponentId::ArchetypeModal)
        {
            return None;
        }

        if let Err(e) = self.app.active(&component) {
            return Some(Msg::Error(AppError::Component(format!(
                "Failed to focus {component:?}: {e}"
            ))));
        }

        self.state_manager.set_active_component(component);
        None
    }
}
