//! # Application Module
//!
//! Application logic for the Moodji gallery: the model that owns the catalog
//! and gallery state, the message handlers that change it, and the view that
//! draws it.
//!
//! ## Architecture
//!
//! The application follows a model-view-update architecture:
//! - **Model** - Catalog, gallery state and the mounted components
//! - **View** - Screen layout and rendering
//! - **Updates** - Message handling and state transitions
//!
//! ## Usage
//!
//! ```no_run
//! use moodji::app::application_lifecycle::{ApplicationLifecycle, StartupOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = ApplicationLifecycle::initialize(StartupOptions::default())?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)?;
//!     Ok(())
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Focus, redraw and layout bookkeeping
pub mod managers;
/// Core application model
pub mod model;
/// Message processing and state update logic
pub mod updates;
/// Screen layout and view composition
pub mod view;
