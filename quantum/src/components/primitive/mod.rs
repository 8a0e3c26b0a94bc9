pub(crate) mod icon;
pub(crate) mod icon_button;
pub(crate) mod placeholder_image;
pub(crate) mod strikethrough_text;
