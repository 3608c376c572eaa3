use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use crate::error::AppError;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

/// Rows kept for the grid before the other rows start to shrink
const MIN_GRID_HEIGHT: u16 = 6;

/// Where each part of the gallery screen is drawn.
///
/// Computed from the frame area on every draw and kept by the model so that
/// mouse clicks can be resolved against what is actually on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub screen: Rect,
    pub title: Rect,
    pub search: Rect,
    pub categories: Rect,
    pub summary: Rect,
    pub grid: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(screen: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(1), // Title
                    Constraint::Length(3), // Search bar
                    Constraint::Length(3), // Category picker
                    Constraint::Length(1), // Result summary
                    Constraint::Min(MIN_GRID_HEIGHT),
                    Constraint::Length(1), // Help bar
                ]
                .as_ref(),
            )
            .split(screen);

        Self {
            screen,
            title: chunks[0],
            search: chunks[1],
            categories: chunks[2],
            summary: chunks[3],
            grid: chunks[4],
            help: chunks[5],
        }
    }
}

// Render the error popup centered on the screen
pub fn view_error_popup(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
) -> Result<(), AppError> {
    let popup_area = PopupLayout::medium(f.area());
    app.view(&ComponentId::ErrorPopup, f, popup_area);

    // Make sure the popup has focus
    app.active(&ComponentId::ErrorPopup)
        .map_err(|e| AppError::Component(e.to_string()))?;

    Ok(())
}

// Higher-order function to draw the error popup over a view when one is mounted
pub fn with_error_popup<F>(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    layout: &ScreenLayout,
    view_fn: F,
) -> Result<(), AppError>
where
    F: FnOnce(
        &mut Application<ComponentId, Msg, NoUserEvent>,
        &mut Frame,
        &ScreenLayout,
    ) -> Result<(), AppError>,
{
    view_fn(app, f, layout)?;

    if app.mounted(&ComponentId::ErrorPopup) {
        return view_error_popup(app, f);
    }

    Ok(())
}

pub fn view_gallery(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    layout: &ScreenLayout,
) -> Result<(), AppError> {
    app.view(&ComponentId::Title, f, layout.title);
    app.view(&ComponentId::SearchBar, f, layout.search);
    app.view(&ComponentId::CategoryPicker, f, layout.categories);
    app.view(&ComponentId::ResultsSummary, f, layout.summary);
    app.view(&ComponentId::ArchetypeGrid, f, layout.grid);

    view_archetype_modal(app, f, layout)
}

// The modal covers the whole frame; its backdrop dims everything behind it
pub fn view_archetype_modal(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    layout: &ScreenLayout,
) -> Result<(), AppError> {
    if app.mounted(&ComponentId::ArchetypeModal) {
        app.view(&ComponentId::ArchetypeModal, f, layout.screen);
    }
    Ok(())
}
