/// Intent events handled by the lesson sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CourseNavIntent {
    /// Expand or collapse the section at `index`.
    ToggleSection { index: usize },
    /// Open or close the off-canvas sidebar.
    ToggleSidebar,
}
