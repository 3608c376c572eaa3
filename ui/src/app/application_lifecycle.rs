//! Application lifecycle management
//!
//! Initialization, the main loop and shutdown of the terminal gallery.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{self, AppConfig, ConfigValidationError};
use crate::error::{AppError, ErrorReporter};
use crate::theme::{ThemeConfig, ThemeManager};

use catalog::{Catalog, CategoryFilter, ColorPolicy, GalleryState};
use log::{debug, error, info, warn};
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;
use tuirealm::{AttrValue, Attribute, Update};

/// Result of theme initialization attempt
#[derive(Debug)]
pub enum ThemeInitializationResult {
    /// Theme loaded successfully with no errors
    Success,
    /// User theme failed, but fallback to default succeeded. Contains error message to show user.
    FallbackSuccess { error_message: String },
    /// Both user theme and default theme failed. Application should exit.
    CriticalFailure { error_message: String },
}

/// What the gallery starts with, usually taken from the command line
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Dataset to load; falls back to `catalog_path` in config, then the
    /// built-in catalog
    pub catalog_path: Option<PathBuf>,
    pub query: String,
    pub category: Option<String>,
}

/// Load the catalog named by the options or config, or the built-in one.
pub fn load_catalog(path: Option<&Path>, policy: ColorPolicy) -> Result<Catalog, AppError> {
    let catalog = match path {
        Some(path) => Catalog::load(path, policy)?,
        None => {
            debug!("Using built-in archetype catalog");
            Catalog::builtin()?
        }
    };
    Ok(catalog)
}

/// Initial gallery state for a catalog. A category the catalog does not
/// contain falls back to "All" and is returned as a warning.
pub fn initial_gallery(
    catalog: &Catalog,
    query: &str,
    category: Option<&str>,
) -> (GalleryState, Option<String>) {
    let requested = category.map(CategoryFilter::from).unwrap_or_default();

    if requested.is_all() || catalog.categories().iter().any(|c| c == requested.as_str()) {
        return (GalleryState::with_filters(query, requested), None);
    }

    let warning = format!(
        "Category '{requested}' is not in the catalog.\n\nAvailable: {}\n\nShowing all categories instead.",
        catalog.categories().join(", ")
    );
    (
        GalleryState::with_filters(query, CategoryFilter::All),
        Some(warning),
    )
}

/// Manages the display of configuration errors with user interaction
pub struct ConfigErrorDisplay {
    model: Model<CrosstermTerminalAdapter>,
}

impl ConfigErrorDisplay {
    /// Initialize the error display with the given validation errors
    pub fn new(validation_errors: Vec<ConfigValidationError>) -> Result<Self, Box<dyn StdError>> {
        // An empty gallery behind the popup
        let catalog = Catalog::new(Vec::new(), ColorPolicy::Strict)?;
        let mut model = Model::new(catalog, GalleryState::new())
            .map_err(|e| format!("Failed to initialize model for error display: {e}"))?;

        // Show the first error in a popup (most critical one)
        if let Some(first_error) = validation_errors.first() {
            let error_message = first_error.user_message();
            error!("Configuration error: {error_message}");

            if let Err(e) = model.mount_error_popup(&AppError::Config(error_message)) {
                error!("Failed to mount configuration error popup: {e}");
            }
        }

        // Also log all validation errors for debugging
        for (i, validation_error) in validation_errors.iter().enumerate() {
            error!("Config validation error {}: {validation_error}", i + 1);
        }

        Ok(Self { model })
    }

    /// Show the error popup and wait for user acknowledgment
    pub fn show_and_wait_for_acknowledgment(&mut self) -> Result<(), Box<dyn StdError>> {
        info!(
            "Configuration validation failed. Application will exit after user acknowledges the error."
        );

        ApplicationLifecycle::setup_terminal(&mut self.model)?;

        if let Err(e) = self.model.view() {
            error!("Error during error popup rendering: {e}");
        }

        while !self.model.state_manager.should_quit() {
            self.model.update_outside_msg();

            match self.model.app.tick(PollStrategy::Once) {
                Err(err) => {
                    error!("Application tick error during error display: {err}");
                    break;
                }
                Ok(messages) if !messages.is_empty() => {
                    for msg in messages.into_iter() {
                        let mut msg = Some(msg);
                        while msg.is_some() {
                            msg = self.model.update(msg);
                        }
                    }

                    // Closing the popup ends the program
                    if !self.model.app.mounted(&ComponentId::ErrorPopup) {
                        info!("Configuration error popup closed by user, terminating application");
                        self.model.set_quit(true);
                        break;
                    }

                    if let Err(e) = self.model.view() {
                        error!("Error during view rendering: {e}");
                        break;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Properly shutdown the error display
    pub fn shutdown(self) {
        info!("Terminating application due to configuration errors");
        let _ = ApplicationLifecycle::shutdown_application(self.model);
    }
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model
    pub fn initialize(
        options: StartupOptions,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting Moodji archetype gallery");

        let config = Self::load_configuration()?;
        let theme_init_result = Self::initialize_theme(&config.theme())?;
        Self::validate_configuration(config)?;

        info!("Configuration loaded and validated successfully");

        let catalog_path = options.catalog_path.or_else(|| config.catalog_path());
        let catalog = Self::load_startup_catalog(catalog_path.as_deref(), config.color_policy())?;
        let (gallery, category_warning) =
            initial_gallery(&catalog, &options.query, options.category.as_deref());

        let mut model = Self::create_model(catalog, gallery)?;
        Self::handle_theme_fallback(&mut model, theme_init_result)?;

        if let Some(message) = category_warning {
            warn!("{message}");
            model.error_reporter.report_warning(
                AppError::State(message),
                "Gallery",
                "initial_category",
            );
        }

        Ok(model)
    }

    /// Load the application configuration
    pub fn load_configuration() -> Result<&'static AppConfig, Box<dyn StdError>> {
        match config::get_config() {
            config::ConfigLoadResult::Success(config) => Ok(config.as_ref()),
            config::ConfigLoadResult::LoadError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationLoader",
                    "load_config",
                    "Configuration loading failed. The application cannot start without a valid configuration.",
                );
                Err(error.to_string().into())
            }
            config::ConfigLoadResult::DeserializeError(error) => {
                Self::report_critical_error(
                    AppError::Config(error.to_string()),
                    "ConfigurationParser",
                    "parse_config",
                    "Configuration parsing failed. Please fix your configuration syntax and try again.",
                );
                Err(error.to_string().into())
            }
        }
    }

    /// Initialize the global theme manager
    fn initialize_theme(
        theme_config: &ThemeConfig,
    ) -> Result<ThemeInitializationResult, Box<dyn StdError>> {
        let result = Self::try_initialize_theme_manager(theme_config);

        // Handle critical theme failures immediately
        if let ThemeInitializationResult::CriticalFailure { error_message } = &result {
            Self::report_critical_error(
                AppError::Config(error_message.clone()),
                "ThemeManager",
                "initialize",
                "Application cannot start due to theme initialization failure. Please check your theme configuration.",
            );
            return Err(error_message.clone().into());
        }

        Ok(result)
    }

    /// Attempt to initialize theme manager with fallback
    fn try_initialize_theme_manager(theme_config: &ThemeConfig) -> ThemeInitializationResult {
        let Err(e) = ThemeManager::init_global(theme_config) else {
            return ThemeInitializationResult::Success;
        };
        error!("Failed to initialize theme manager with user config: {e}");

        let default_config = ThemeConfig::default();
        match ThemeManager::init_global(&default_config) {
            Ok(()) => {
                info!("Successfully fell back to default theme");
                ThemeInitializationResult::FallbackSuccess {
                    error_message: format!(
                        "Unable to load theme '{}' with flavor '{}': {e}\n\nFalling back to default theme ({}/{}).",
                        theme_config.theme_name,
                        theme_config.flavor_name,
                        default_config.theme_name,
                        default_config.flavor_name
                    ),
                }
            }
            Err(default_e) => {
                error!("Failed to initialize theme manager with default theme: {default_e}");
                ThemeInitializationResult::CriticalFailure {
                    error_message: format!(
                        "Critical theme error: Unable to load any theme.\n\nUser theme error: {e}\nDefault theme error: {default_e}\n\nPlease check your theme files."
                    ),
                }
            }
        }
    }

    /// Validate configuration after theme manager is initialized
    fn validate_configuration(config: &AppConfig) -> Result<(), Box<dyn StdError>> {
        if let Err(validation_errors) = config.validate() {
            error!(
                "Configuration validation failed with {} errors",
                validation_errors.len()
            );
            Self::show_config_error_and_exit(validation_errors)?;
            return Err("Configuration validation failed".into());
        }
        Ok(())
    }

    fn load_startup_catalog(
        path: Option<&Path>,
        policy: ColorPolicy,
    ) -> Result<Catalog, Box<dyn StdError>> {
        match load_catalog(path, policy) {
            Ok(catalog) => {
                info!(
                    "Loaded {} archetypes ({:?} colour policy)",
                    catalog.len(),
                    policy
                );
                Ok(catalog)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "Catalog",
                    "load",
                    "The archetype catalog could not be loaded. Check the catalog file, or start without --catalog to use the built-in set.",
                );
                Err(e.into())
            }
        }
    }

    /// Create and initialize the application model
    fn create_model(
        catalog: Catalog,
        gallery: GalleryState,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(catalog, gallery) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                Self::report_critical_error(
                    e.clone(),
                    "ApplicationModel",
                    "initialize",
                    "Failed to initialize application model. The application cannot start. Please check your configuration and try again.",
                );
                Err(e.into())
            }
        }
    }

    /// Handle theme fallback by showing error popup if needed
    fn handle_theme_fallback(
        model: &mut Model<CrosstermTerminalAdapter>,
        theme_init_result: ThemeInitializationResult,
    ) -> Result<(), Box<dyn StdError>> {
        if let ThemeInitializationResult::FallbackSuccess { error_message } = theme_init_result {
            if let Err(e) = model.mount_error_popup(&AppError::Config(error_message)) {
                model.error_reporter.report_theme_error("fallback", e);
            }
        }
        Ok(())
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        model
            .terminal
            .enable_mouse_capture()
            .map_err(|e| format!("Failed to enable mouse capture: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.state_manager.should_quit() {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    /// Process a single iteration of the main loop
    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model)?;

        Ok(())
    }

    /// Handle tick errors by showing error popup
    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        if let Err(e) = model.mount_error_popup(&AppError::Component(format!(
            "Application error: {err:?}"
        ))) {
            error!("Failed to mount error popup: {e}");
            // Fall back to showing the error in the summary line
            if model
                .app
                .attr(
                    &ComponentId::ResultsSummary,
                    Attribute::Text,
                    AttrValue::String(format!("Application error: {err:?}")),
                )
                .is_err()
            {
                return Err(format!("Failed to display error: {err:?}").into());
            }
        }
        model.set_redraw(true);
        Ok(())
    }

    /// Process all received messages
    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.set_redraw(true);
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.update(msg);
            }
        }
    }

    /// Handle view redraw if needed
    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) -> Result<(), Box<dyn StdError>> {
        if model.state_manager.needs_redraw() {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                if let Err(popup_err) = model.mount_error_popup(&e) {
                    model
                        .error_reporter
                        .report_mount_error("ErrorPopup", "mount", popup_err);
                }
            }
            model.state_manager.redraw_complete();
        }
        Ok(())
    }

    /// Properly shutdown the application
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        debug!("Leaving alternate screen");
        let _ = model.terminal.disable_mouse_capture();
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }

    /// Show configuration error and exit
    fn show_config_error_and_exit(
        validation_errors: Vec<ConfigValidationError>,
    ) -> Result<(), Box<dyn StdError>> {
        let mut error_display = ConfigErrorDisplay::new(validation_errors)?;
        error_display.show_and_wait_for_acknowledgment()?;
        error_display.shutdown();
        Ok(())
    }

    /// Report critical error and prepare for application exit
    pub fn report_critical_error(
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        // Nothing drains this channel; the reporter is used for its logging
        let (tx, _rx) = std::sync::mpsc::channel();
        let error_reporter = ErrorReporter::new(tx);

        error_reporter.report_critical_and_exit(error, component, operation, user_message);

        // Also ensure the error is visible in case logging is not set up
        eprintln!("Critical Error: {user_message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Archetype;
    use claims::{assert_none, assert_ok, assert_some};

    fn entry(name: &str, category: &str) -> Archetype {
        Archetype {
            name: name.to_string(),
            category: category.to_string(),
            mood_tone: String::new(),
            description: String::new(),
            hex: "#A78BFA".to_string(),
            emoji_sigils: String::new(),
            visual_arrival: String::new(),
            soundtrack: String::new(),
            accent_animation: String::new(),
            arrival_style_group: String::new(),
            ui_components: String::new(),
            payload_signature: format!("sig.{}", name.to_lowercase()),
            image_url: None,
        }
    }

    fn catalog() -> Catalog {
        assert_ok!(Catalog::new(
            vec![entry("Bliss", "Joy"), entry("Ache", "Grief")],
            ColorPolicy::Strict
        ))
    }

    #[test]
    fn test_initial_gallery_uses_known_category() {
        let (gallery, warning) = initial_gallery(&catalog(), "bl", Some("Joy"));
        assert_none!(warning);
        assert_eq!(gallery.query(), "bl");
        assert_eq!(gallery.category(), &CategoryFilter::from("Joy"));
        assert!(!gallery.is_modal_open());
    }

    #[test]
    fn test_initial_gallery_defaults_to_all() {
        let (gallery, warning) = initial_gallery(&catalog(), "", None);
        assert_none!(warning);
        assert!(gallery.category().is_all());
    }

    #[test]
    fn test_unknown_category_falls_back_with_warning() {
        let (gallery, warning) = initial_gallery(&catalog(), "", Some("Wonder"));
        let warning = assert_some!(warning);
        assert!(warning.contains("'Wonder'"));
        assert!(warning.contains("All, Joy, Grief"));
        assert!(gallery.category().is_all());
    }

    #[test]
    fn test_load_catalog_without_path_is_builtin() {
        let catalog = assert_ok!(load_catalog(None, ColorPolicy::Strict));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_reports_catalog_error() {
        let error = load_catalog(Some(Path::new("archetypes.yaml")), ColorPolicy::Strict)
            .expect_err("yaml is not a supported format");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
