pub(crate) mod ui;
