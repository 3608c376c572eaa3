use super::Model;
use crate::app::view::{ScreenLayout, view_gallery, with_error_popup};
use crate::components::help_bar::HelpBar;
use crate::error::{AppError, AppResult};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let mut view_result: AppResult<()> = Ok(());
        let mut drawn_layout = None;

        // Extract values before the closure to avoid borrowing issues
        let active_component = self.focused_component();
        let mut help_bar = HelpBar::new(&self.keys);

        self.terminal
            .draw(|f| {
                let layout = ScreenLayout::new(f.area());
                drawn_layout = Some(layout);

                view_result = with_error_popup(&mut self.app, f, &layout, view_gallery);

                help_bar.view_with_active(f, layout.help, &active_component);
            })
            .map_err(|e| AppError::Component(format!("Failed to draw frame: {e}")))?;

        self.state_manager.layout = drawn_layout;
        view_result
    }
}
