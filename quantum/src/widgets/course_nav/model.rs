use crate::catalog::Lesson;
use crate::layout::SidebarPlacement;

/// Fixed width of the lesson sidebar.
pub(crate) const COURSE_NAV_WIDTH: f32 = 256.0;

/// A section entry in the lesson sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionViewModel<'a> {
    pub(crate) index: usize,
    pub(crate) title: &'a str,
    pub(crate) lessons: &'a [Lesson],
    pub(crate) is_expanded: bool,
}

impl<'a> SectionViewModel<'a> {
    /// Lessons drawn under the section header; empty while collapsed.
    pub(crate) fn visible_lessons(&self) -> &'a [Lesson] {
        if self.is_expanded { self.lessons } else { &[] }
    }
}

/// Read-only view model for the lesson sidebar.
#[derive(Debug, Clone)]
pub(crate) struct CourseNavViewModel<'a> {
    pub(crate) course_title: &'a str,
    pub(crate) sections: Vec<SectionViewModel<'a>>,
    pub(crate) placement: SidebarPlacement,
}

impl CourseNavViewModel<'_> {
    /// The close button only makes sense for the off-canvas panel.
    pub(crate) fn show_close_button(&self) -> bool {
        self.placement != SidebarPlacement::InFlow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons() -> Vec<Lesson> {
        (1..=3)
            .map(|id| Lesson {
                id,
                title: format!("Lesson {id}"),
                duration: String::from("1:00"),
                is_preview: false,
            })
            .collect()
    }

    #[test]
    fn given_collapsed_section_when_listing_lessons_then_none_are_visible() {
        let lessons = lessons();
        let section = SectionViewModel {
            index: 0,
            title: "Start",
            lessons: &lessons,
            is_expanded: false,
        };

        assert!(section.visible_lessons().is_empty());
    }

    #[test]
    fn given_expanded_section_when_listing_lessons_then_all_are_visible() {
        let lessons = lessons();
        let section = SectionViewModel {
            index: 0,
            title: "Start",
            lessons: &lessons,
            is_expanded: true,
        };

        let ids: Vec<u32> =
            section.visible_lessons().iter().map(|lesson| lesson.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
