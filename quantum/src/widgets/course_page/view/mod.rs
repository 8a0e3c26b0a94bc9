pub(crate) mod course_content;
pub(crate) mod course_overview;
pub(crate) mod hero_banner;
pub(crate) mod pricing_card;
pub(crate) mod suggested_courses;
