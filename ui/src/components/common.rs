use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Title,
    SearchBar,
    CategoryPicker,
    ResultsSummary,
    ArchetypeGrid,
    ArchetypeModal,
    ErrorPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    /// Left mouse button pressed at a screen cell
    PointerDown {
        column: u16,
        row: u16,
    },
    GalleryActivity(GalleryActivityMsg),
    FocusActivity(FocusActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum GalleryActivityMsg {
    QueryChanged(String),
    CategorySelected(String),
    /// Open the detail modal for the archetype with this payload signature
    CardSelected(String),
    CloseModal,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FocusActivityMsg {
    Next,
    Previous,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
