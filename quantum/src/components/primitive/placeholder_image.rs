use iced::widget::svg;
use iced::{ContentFit, Element, Length};

use crate::shared::ui::icons::PLACEHOLDER;

/// Props for an image slot drawn with the bundled placeholder.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaceholderImageProps {
    pub(crate) width: Length,
    pub(crate) height: Length,
}

impl PlaceholderImageProps {
    /// Square slot of `side` pixels.
    pub(crate) fn square(side: f32) -> Self {
        Self {
            width: Length::Fixed(side),
            height: Length::Fixed(side),
        }
    }
}

/// Render the placeholder image, cropped to fill the slot.
pub(crate) fn view<'a, Message: 'a>(
    props: PlaceholderImageProps,
) -> Element<'a, Message> {
    svg::Svg::new(svg::Handle::from_memory(PLACEHOLDER))
        .width(props.width)
        .height(props.height)
        .content_fit(ContentFit::Cover)
        .into()
}
