use crate::app::managers::StateManager;
use crate::components::common::{ComponentId, Msg};
use crate::config::keys::KeyBindingsConfig;
use crate::config::ui::UIConfig;
use crate::error::ErrorReporter;
use catalog::{Catalog, GalleryState};
use std::sync::mpsc::Receiver;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod popup_management;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub state_manager: StateManager,
    pub rx_to_main: Receiver<Msg>,
    pub error_reporter: ErrorReporter,

    /// Every archetype, loaded once at startup
    pub catalog: Catalog,
    /// Query, category and detail modal
    pub gallery: GalleryState,
    /// Payload signatures of the cards currently in the grid, in grid order
    pub visible: Vec<String>,

    pub ui_config: UIConfig,
    pub keys: KeyBindingsConfig,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Handle messages queued by the error reporter
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.state_manager.shutdown();
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.state_manager.set_redraw(redraw);
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.state_manager.quit = quit;
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
