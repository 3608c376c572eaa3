//! # Moodji UI Library
//!
//! Terminal gallery for the Moodji archetypes, built with Ratatui and
//! tui-realm on top of the `catalog` crate.
//!
//! ## Features
//!
//! - Card grid tinted from each archetype's colour
//! - Live search and category filtering
//! - Detail modal with keyboard and mouse dismissal
//! - Layered configuration and TOML themes
//! - Error popups fed by a central error reporter
//!
//! ## Modules
//!
//! - [`app`] - Main application logic and component orchestration
//! - [`components`] - UI components and message types
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`listing`] - Text and JSON output for `--list`
//! - [`logger`] - Logging configuration
//! - [`theme`] - Theme management and styling
//! - [`validation`] - Input validation
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod listing;
pub mod logger;
pub mod theme;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::AppError;

// Re-export the Msg type that tests commonly need
pub use components::common::Msg;

// Re-export validation trait for broader use
pub use validation::Validator;
