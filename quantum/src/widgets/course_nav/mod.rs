mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::CourseNavIntent;
pub(crate) use model::{CourseNavViewModel, SectionViewModel};
pub(crate) use reducer::CourseNavCtx;
use state::CourseNavState;

use crate::catalog::Course;
use crate::layout::{SidebarPlacement, Viewport};

/// Lesson sidebar widget owning the course view UI state.
pub(crate) struct CourseNavWidget {
    state: CourseNavState,
}

impl CourseNavWidget {
    /// Construct the sidebar with the first section expanded.
    pub(crate) fn new() -> Self {
        Self {
            state: CourseNavState::default(),
        }
    }

    /// Reduce an intent event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: CourseNavIntent,
        ctx: &CourseNavCtx,
    ) {
        reducer::reduce(&mut self.state, event, ctx);
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &self,
        course: &'a Course,
        viewport: Viewport,
    ) -> CourseNavViewModel<'a> {
        let sections = course
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionViewModel {
                index,
                title: section.title.as_str(),
                lessons: section.lessons.as_slice(),
                is_expanded: self.state.is_expanded(index),
            })
            .collect();

        CourseNavViewModel {
            course_title: course.title.as_str(),
            sections,
            placement: self.placement(viewport),
        }
    }

    /// Resolve where the sidebar is drawn for the given viewport.
    pub(crate) fn placement(&self, viewport: Viewport) -> SidebarPlacement {
        SidebarPlacement::resolve(viewport, self.state.is_sidebar_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_embedded;

    fn ctx(course: &Course) -> CourseNavCtx {
        CourseNavCtx {
            section_count: course.section_count(),
        }
    }

    fn visible_ids(widget: &CourseNavWidget, course: &Course) -> Vec<u32> {
        widget
            .vm(course, Viewport::Large)
            .sections
            .iter()
            .flat_map(|section| section.visible_lessons())
            .map(|lesson| lesson.id)
            .collect()
    }

    #[test]
    fn given_new_widget_when_rendered_then_only_first_section_lessons_are_visible()
     {
        let course = load_embedded().expect("embedded catalog should load");
        let widget = CourseNavWidget::new();

        assert_eq!(visible_ids(&widget, &course), vec![1, 2, 3, 4]);
    }

    #[test]
    fn given_second_section_toggled_when_rendered_then_its_lessons_are_added() {
        let course = load_embedded().expect("embedded catalog should load");
        let mut widget = CourseNavWidget::new();

        widget
            .reduce(CourseNavIntent::ToggleSection { index: 1 }, &ctx(&course));

        let vm = widget.vm(&course, Viewport::Large);
        let expanded: Vec<bool> =
            vm.sections.iter().map(|section| section.is_expanded).collect();
        assert_eq!(expanded, vec![true, true, false]);
        assert_eq!(visible_ids(&widget, &course), vec![1, 2, 3, 4, 5, 6]);
        assert!(vm.sections[2].visible_lessons().is_empty());
    }

    #[test]
    fn given_narrow_viewport_when_sidebar_toggled_then_overlay_is_shown() {
        let course = load_embedded().expect("embedded catalog should load");
        let mut widget = CourseNavWidget::new();
        assert_eq!(widget.placement(Viewport::Small), SidebarPlacement::Hidden);

        widget.reduce(CourseNavIntent::ToggleSidebar, &ctx(&course));

        let vm = widget.vm(&course, Viewport::Small);
        assert_eq!(vm.placement, SidebarPlacement::Overlay);
        assert!(vm.show_close_button());
    }

    #[test]
    fn given_large_viewport_when_sidebar_closed_then_sidebar_stays_in_flow() {
        let course = load_embedded().expect("embedded catalog should load");
        let widget = CourseNavWidget::new();

        let vm = widget.vm(&course, Viewport::Large);

        assert_eq!(vm.placement, SidebarPlacement::InFlow);
        assert!(!vm.show_close_button());
        assert_eq!(vm.course_title, "Blender 3D Fundamentals");
    }
}
