//! # Moodji Catalog Library
//!
//! Core library for the Moodji archetype gallery. It owns everything the
//! gallery does that is independent of how it is drawn: the archetype data
//! model, catalog loading, colour derivation for card theming, text and
//! category filtering, and the gallery view state machine.
//!
//! ## Modules
//!
//! - [`model`] - Archetype records and the read-only catalog
//! - [`color`] - `#RRGGBB` parsing, RGB to HSL conversion and light/dark tone
//! - [`filter`] - Case-insensitive search and category filtering
//! - [`gallery`] - Query, category and detail-modal state
//! - [`common`] - Error types shared by the modules above

pub mod color;
pub mod common;
pub mod filter;
pub mod gallery;
pub mod model;

pub use color::{Hsl, Rgb, Tone, hex_to_hsl};
pub use common::errors::CatalogError;
pub use filter::{ALL_CATEGORIES, CategoryFilter, categories, filter};
pub use gallery::{GalleryState, ModalState, PointerTarget, ResultSummary};
pub use model::{Archetype, Catalog, ColorPolicy};
