use crate::app::model::Model;
use crate::app::view::ScreenLayout;
use crate::components::archetype_grid::{ArchetypeGrid, GridKeys, GridLayout};
use crate::components::archetype_modal::ModalLayout;
use crate::components::common::{ComponentId, GalleryActivityMsg, Msg};
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::error::{AppError, AppResult};
use tuirealm::ratatui::layout::Position;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{State, StateValue};

/// What a click on the gallery screen lands on while no overlay is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryClick {
    /// A card, by index into the visible results
    Card(usize),
    /// An input area, which takes focus
    Focus(ComponentId),
    Nothing,
}

pub fn gallery_click(
    layout: &ScreenLayout,
    grid: &GridLayout,
    column: u16,
    row: u16,
) -> GalleryClick {
    if let Some(index) = grid.card_at(column, row) {
        return GalleryClick::Card(index);
    }

    let position = Position::new(column, row);
    if layout.search.contains(position) {
        GalleryClick::Focus(ComponentId::SearchBar)
    } else if layout.categories.contains(position) {
        GalleryClick::Focus(ComponentId::CategoryPicker)
    } else if layout.grid.contains(position) {
        GalleryClick::Focus(ComponentId::ArchetypeGrid)
    } else {
        GalleryClick::Nothing
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_gallery(&mut self, msg: GalleryActivityMsg) -> Option<Msg> {
        match msg {
            GalleryActivityMsg::QueryChanged(query) => {
                self.gallery.set_query(query);
                self.refresh_results().err().map(Msg::Error)
            }
            GalleryActivityMsg::CategorySelected(category) => {
                self.gallery.set_category(category.as_str());
                self.refresh_results().err().map(Msg::Error)
            }
            GalleryActivityMsg::CardSelected(signature) => self.open_details(&signature),
            GalleryActivityMsg::CloseModal => {
                self.gallery.close();
                self.unmount_archetype_modal().err().map(Msg::Error)
            }
        }
    }

    fn open_details(&mut self, signature: &str) -> Option<Msg> {
        let Some(entry) = self.catalog.get(signature).cloned() else {
            return Some(Msg::Error(AppError::State(format!(
                "No archetype with signature '{signature}'"
            ))));
        };

        self.gallery.select(&entry);
        self.mount_archetype_modal(entry).err().map(Msg::Error)
    }

    /// Re-run the filter and rebuild the grid and result summary from it.
    /// The grid selection returns to the first card.
    pub fn refresh_results(&mut self) -> AppResult<()> {
        let visible = self.gallery.visible(&self.catalog);
        let summary = self.gallery.summary(visible.len());
        log::debug!(
            "Filter query='{}' category='{}' -> {} results",
            self.gallery.query(),
            self.gallery.category(),
            visible.len()
        );

        self.visible = visible
            .iter()
            .map(|entry| entry.payload_signature.clone())
            .collect();
        let entries = visible.into_iter().cloned().collect();

        self.app.remount_with_state(
            ComponentId::ArchetypeGrid,
            ArchetypeGrid::new(
                entries,
                self.ui_config.card_width(),
                self.ui_config.card_height(),
                GridKeys::from(&self.keys),
            ),
            Vec::default(),
        )?;

        self.app.remount_with_state(
            ComponentId::ResultsSummary,
            TextLabel::summary(summary.to_string()),
            Vec::default(),
        )?;

        Ok(())
    }

    pub fn update_pointer(&mut self, column: u16, row: u16) -> Option<Msg> {
        let layout = self.state_manager.layout?;

        // The popup only reacts to its own keys
        if self.app.mounted(&ComponentId::ErrorPopup) {
            return None;
        }

        if self.gallery.is_modal_open() {
            let target = ModalLayout::new(layout.screen).target_at(column, row);
            log::debug!("Pointer down on {target:?} at ({column}, {row})");
            if self.gallery.pointer_down(target) {
                return self.unmount_archetype_modal().err().map(Msg::Error);
            }
            return None;
        }

        let selected = match self.app.state(&ComponentId::ArchetypeGrid) {
            Ok(State::One(StateValue::Usize(index))) => index,
            _ => 0,
        };
        let grid = GridLayout::new(
            layout.grid,
            self.visible.len(),
            self.ui_config.card_width(),
            self.ui_config.card_height(),
            selected,
        );

        match gallery_click(&layout, &grid, column, row) {
            GalleryClick::Card(index) => self.visible.get(index).map(|signature| {
                Msg::GalleryActivity(GalleryActivityMsg::CardSelected(signature.clone()))
            }),
            GalleryClick::Focus(component) => self.focus_component(component),
            GalleryClick::Nothing => None,
        }
    }
}
