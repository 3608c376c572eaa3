use super::Model;
use crate::components::archetype_grid::GridKeys;
use crate::components::archetype_modal::ArchetypeModal;
use crate::components::common::ComponentId;
use crate::components::error_popup::ErrorPopup;
use crate::components::state::ComponentStateMount;
use crate::error::{AppError, AppResult};
use catalog::Archetype;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error),
            Vec::default(),
        )?;

        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.set_redraw(true);

        Ok(())
    }

    /// Mount a warning in the error popup slot and give focus to it
    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::warning(message),
            Vec::default(),
        )?;

        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.set_redraw(true);

        Ok(())
    }

    /// Unmount error popup and return focus to previous component
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::ErrorPopup) {
            self.app
                .umount(&ComponentId::ErrorPopup)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        self.activate_component_for_current_state()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Mount the detail modal for `archetype` and give focus to it
    pub fn mount_archetype_modal(&mut self, archetype: Archetype) -> AppResult<()> {
        log::debug!("Opening details for {}", archetype.name);

        self.app.remount_with_state(
            ComponentId::ArchetypeModal,
            ArchetypeModal::new(archetype, GridKeys::from(&self.keys)),
            Vec::default(),
        )?;

        // An error popup keeps focus until it is dismissed
        self.activate_component_for_current_state()?;
        self.set_redraw(true);

        Ok(())
    }

    /// Unmount the detail modal and return focus to the gallery
    pub fn unmount_archetype_modal(&mut self) -> AppResult<()> {
        if !self.app.mounted(&ComponentId::ArchetypeModal) {
            log::debug!("ArchetypeModal not mounted, skipping unmount");
        } else {
            self.app
                .umount(&ComponentId::ArchetypeModal)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        self.activate_component_for_current_state()?;
        self.set_redraw(true);
        Ok(())
    }

    /// Component that owns keyboard input right now: an error popup, then the
    /// detail modal, then the focused gallery component.
    pub fn focused_component(&self) -> ComponentId {
        if self.app.mounted(&ComponentId::ErrorPopup) {
            ComponentId::ErrorPopup
        } else if self.app.mounted(&ComponentId::ArchetypeModal) {
            ComponentId::ArchetypeModal
        } else {
            self.state_manager.active_component.clone()
        }
    }

    /// Helper method to activate the appropriate component for the current state
    pub fn activate_component_for_current_state(&mut self) -> AppResult<()> {
        let component = self.focused_component();
        self.app
            .active(&component)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
