use iced::widget::svg;
use iced::{Color, Element, Length};

/// Props for rendering a tinted SVG icon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconProps {
    pub(crate) icon: &'static [u8],
    pub(crate) size: f32,
    pub(crate) color: Color,
    pub(crate) hover_color: Option<Color>,
}

/// Render a square, non-interactive icon.
pub(crate) fn view<'a, Message: 'a>(props: IconProps) -> Element<'a, Message> {
    let IconProps {
        icon,
        size,
        color,
        hover_color,
    } = props;

    svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, status| {
            let color = match (status, hover_color) {
                (svg::Status::Hovered, Some(hover)) => hover,
                _ => color,
            };

            svg::Style { color: Some(color) }
        })
        .into()
}
