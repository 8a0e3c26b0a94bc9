pub(crate) mod lesson_sidebar;
