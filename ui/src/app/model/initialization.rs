use super::Model;
use crate::app::managers::StateManager;
use crate::app::managers::state_manager::INITIAL_FOCUS;
use crate::components::archetype_grid::{ArchetypeGrid, GridKeys};
use crate::components::category_picker::CategoryPicker;
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::search_bar::SearchBar;
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::config;
use crate::error::{AppError, AppResult, ErrorReporter};
use catalog::{Catalog, GalleryState};
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

const TITLE: &str = "✨ Moodji Archetypes · moods with a colour, a sound and a sigil ✨";

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(
        catalog: &Catalog,
        gallery: &GalleryState,
    ) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let config = config::get_config_or_panic();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount_with_state(ComponentId::Title, TextLabel::title(TITLE), Vec::default())?;

        app.mount_with_state(
            ComponentId::SearchBar,
            SearchBar::new(gallery.query()),
            Vec::default(),
        )?;

        let keys = config.keys();
        app.mount_with_state(
            ComponentId::CategoryPicker,
            CategoryPicker::new(
                catalog.categories().to_vec(),
                gallery.category(),
                keys.left(),
                keys.right(),
            ),
            Vec::default(),
        )?;

        let visible = gallery.visible(catalog);
        app.mount_with_state(
            ComponentId::ResultsSummary,
            TextLabel::summary(gallery.summary(visible.len()).to_string()),
            Vec::default(),
        )?;

        app.mount_with_state(
            ComponentId::ArchetypeGrid,
            ArchetypeGrid::new(
                visible.into_iter().cloned().collect(),
                config.ui().card_width(),
                config.ui().card_height(),
                GridKeys::from(keys),
            ),
            Vec::default(),
        )?;

        app.mount_with_state(
            ComponentId::GlobalKeyWatcher,
            GlobalKeyWatcher::new(keys.quit()),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )?;

        app.active(&INITIAL_FOCUS)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    /// Build the gallery over `catalog`, starting from the filters in `gallery`.
    pub fn new(catalog: Catalog, gallery: GalleryState) -> AppResult<Self> {
        let config = config::get_config_or_panic();

        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main);

        let app = Self::init_app(&catalog, &gallery)?;
        let visible = gallery
            .visible(&catalog)
            .into_iter()
            .map(|entry| entry.payload_signature.clone())
            .collect();

        log::info!(
            "Gallery ready with {} archetypes in {} categories",
            catalog.len(),
            catalog.categories().len().saturating_sub(1)
        );

        Ok(Self {
            app,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            state_manager: StateManager::new(),
            rx_to_main,
            error_reporter,
            catalog,
            gallery,
            visible,
            ui_config: config.ui().clone(),
            keys: config.keys().clone(),
        })
    }
}
