mod errors;
mod model;
mod storage;

pub(crate) use model::{Course, IncludeKind, Lesson, Publisher, SuggestedCourse};
pub(crate) use storage::load_embedded;
