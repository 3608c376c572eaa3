//! # UI Components
//!
//! tuirealm components that make up the gallery screen. Each one owns its own
//! input handling and reports what happened as a [`common::Msg`]; the
//! application model turns those messages into changes of the gallery state.
//!
//! The screen, top to bottom:
//!
//! - [`text_label::TextLabel`] - title and result summary lines
//! - [`search_bar::SearchBar`] - free-text query
//! - [`category_picker::CategoryPicker`] - category tabs
//! - [`archetype_grid::ArchetypeGrid`] - card grid
//! - [`help_bar::HelpBar`] - context shortcuts
//!
//! [`archetype_modal::ArchetypeModal`] and [`error_popup::ErrorPopup`] are
//! drawn over the grid while open, and
//! [`global_key_watcher::GlobalKeyWatcher`] receives every event regardless
//! of focus.

// Core components
pub mod common;
pub mod state;

// Shared rendering helpers
pub mod base_popup;

// Input components
pub mod category_picker;
pub mod search_bar;

// Display components
pub mod archetype_grid;
pub mod help_bar;
pub mod text_label;

// Popup components
pub mod archetype_modal;
pub mod error_popup;

// System components
pub mod global_key_watcher;

#[cfg(test)]
pub(crate) mod fixtures;
