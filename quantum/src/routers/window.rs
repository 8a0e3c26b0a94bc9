use iced::{Size, Task};

use crate::app::{App, AppEvent};

/// Record the new window size and reclassify the viewport.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.state.set_window_size(size) {
        log::debug!(
            "viewport changed to {:?} at {}x{}",
            app.state.viewport(),
            app.state.window_size().width,
            app.state.window_size().height
        );
    }
    Task::none()
}
