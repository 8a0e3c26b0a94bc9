use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::course_nav::{CourseNavCtx, CourseNavIntent};

/// Route a lesson sidebar intent through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    intent: CourseNavIntent,
) -> Task<AppEvent> {
    if let CourseNavIntent::ToggleSection { index } = intent {
        if let Some(section) = app.course.section(index) {
            log::debug!("toggling section \"{}\"", section.title);
        }
    }

    let ctx = CourseNavCtx {
        section_count: app.course.section_count(),
    };
    app.widgets.course_nav.reduce(intent, &ctx);
    Task::none()
}
