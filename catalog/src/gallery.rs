//! Gallery view state: search query, category selection and the detail modal.

use crate::filter::{self, CategoryFilter};
use crate::model::{Archetype, Catalog};
use std::fmt;

/// Detail modal state. An open modal always carries the entry it shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Archetype),
}

/// What a pointer press landed on while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area surrounding the panel.
    Backdrop,
    /// Anywhere inside the panel other than the close control.
    Panel,
    /// The panel's close button.
    CloseControl,
}

impl PointerTarget {
    pub fn dismisses(&self) -> bool {
        matches!(self, PointerTarget::Backdrop | PointerTarget::CloseControl)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    query: String,
    category: CategoryFilter,
    modal: ModalState,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a query and category, e.g. from command line flags.
    pub fn with_filters(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
            modal: ModalState::Closed,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
    }

    /// Open the modal on `entry`, replacing whatever was shown.
    pub fn select(&mut self, entry: &Archetype) {
        log::debug!("Opening archetype '{}'", entry.name);
        self.modal = ModalState::Open(entry.clone());
    }

    pub fn close(&mut self) {
        if self.is_modal_open() {
            log::debug!("Closing archetype modal");
        }
        self.modal = ModalState::Closed;
    }

    /// Handle a pointer press while the modal is shown. Returns true when the
    /// press closed the modal.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.is_modal_open() && target.dismisses() {
            self.close();
            return true;
        }
        false
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }

    pub fn selected(&self) -> Option<&Archetype> {
        match &self.modal {
            ModalState::Open(entry) => Some(entry),
            ModalState::Closed => None,
        }
    }

    /// Entries matching the current query and category.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Archetype> {
        filter::filter(catalog.entries(), &self.query, &self.category)
    }

    pub fn summary(&self, count: usize) -> ResultSummary {
        ResultSummary {
            count,
            category: self.category.clone(),
        }
    }
}

/// The "Found N archetypes" line shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub count: usize,
    pub category: CategoryFilter,
}

impl ResultSummary {
    pub const EMPTY_TITLE: &'static str = "No archetypes found";
    pub const EMPTY_HINT: &'static str = "Try adjusting your search term or filter selection";

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "Found {} archetype{plural}", self.count)?;
        if let CategoryFilter::Only(category) = &self.category {
            write!(f, " in {category}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorPolicy;
    use crate::model::tests::archetype;
    use claims::{assert_none, assert_ok, assert_some_eq};

    #[test]
    fn test_starts_closed_with_no_filters() {
        let state = GalleryState::new();
        assert!(!state.is_modal_open());
        assert_none!(state.selected());
        assert_eq!(state.query(), "");
        assert!(state.category().is_all());
    }

    #[test]
    fn test_select_opens_and_close_clears() {
        let sun = archetype("Sun", "Joy", "#FDE68A");
        let mut state = GalleryState::new();

        state.select(&sun);
        assert!(state.is_modal_open());
        assert_some_eq!(state.selected(), &sun);

        state.close();
        assert_eq!(*state.modal(), ModalState::Closed);
        assert_none!(state.selected());
    }

    #[test]
    fn test_select_replaces_open_entry() {
        let sun = archetype("Sun", "Joy", "#FDE68A");
        let rain = archetype("Rain", "Grief", "#1D4ED8");
        let mut state = GalleryState::new();
        state.select(&sun);
        state.select(&rain);
        assert_some_eq!(state.selected(), &rain);
    }

    #[test]
    fn test_pointer_down_targets() {
        let sun = archetype("Sun", "Joy", "#FDE68A");
        let mut state = GalleryState::new();
        state.select(&sun);

        assert!(!state.pointer_down(PointerTarget::Panel));
        assert!(state.is_modal_open());

        assert!(state.pointer_down(PointerTarget::Backdrop));
        assert!(!state.is_modal_open());

        state.select(&sun);
        assert!(state.pointer_down(PointerTarget::CloseControl));
        assert_none!(state.selected());
    }

    #[test]
    fn test_pointer_down_when_closed_is_a_no_op() {
        let mut state = GalleryState::new();
        assert!(!state.pointer_down(PointerTarget::Backdrop));
        assert_eq!(state, GalleryState::new());
    }

    #[test]
    fn test_filters_do_not_touch_modal() {
        let sun = archetype("Sun", "Joy", "#FDE68A");
        let mut state = GalleryState::new();
        state.select(&sun);
        state.set_query("rain");
        state.set_category("Grief");
        assert_some_eq!(state.selected(), &sun);
        assert_eq!(state.category().as_str(), "Grief");
    }

    #[test]
    fn test_visible_applies_query_and_category() {
        let catalog = assert_ok!(Catalog::new(
            vec![
                archetype("Sun", "Joy", "#FDE68A"),
                archetype("Sunset", "Grief", "#F97316"),
                archetype("Rain", "Grief", "#1D4ED8"),
            ],
            ColorPolicy::Strict,
        ));
        let mut state = GalleryState::with_filters("sun", CategoryFilter::All);
        assert_eq!(state.visible(&catalog).len(), 2);

        state.set_category("Grief");
        let visible = state.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sunset");
    }

    #[test]
    fn test_summary_wording() {
        let mut state = GalleryState::new();
        assert_eq!(state.summary(0).to_string(), "Found 0 archetypes");
        assert_eq!(state.summary(1).to_string(), "Found 1 archetype");
        assert_eq!(state.summary(12).to_string(), "Found 12 archetypes");

        state.set_category("Joy");
        assert_eq!(state.summary(2).to_string(), "Found 2 archetypes in Joy");
        assert!(state.summary(0).is_empty());
    }
}
