//! Message handlers, one module per message family.

pub mod focus;
pub mod gallery;
pub mod popup;
