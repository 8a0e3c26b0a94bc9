pub(crate) mod course_nav;
pub(crate) mod course_page;
pub(crate) mod header;
