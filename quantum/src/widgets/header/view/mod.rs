pub(crate) mod top_bar;
