mod event;
mod model;
pub(crate) mod view;

pub(crate) use event::CoursePageEvent;
pub(crate) use model::{CoursePageViewModel, PageLayout};

use crate::catalog::Course;
use crate::layout::Viewport;

/// Stateless main content area of the course view.
pub(crate) struct CoursePageWidget;

impl CoursePageWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &self,
        course: &'a Course,
        viewport: Viewport,
    ) -> CoursePageViewModel<'a> {
        CoursePageViewModel {
            course,
            layout: PageLayout::for_viewport(viewport),
        }
    }
}
