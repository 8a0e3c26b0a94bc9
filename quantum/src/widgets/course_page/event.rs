/// Events emitted by the course page.
///
/// The page only renders inert controls, so the type has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoursePageEvent {}
