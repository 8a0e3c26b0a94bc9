use iced::widget::{Space, Stack, container, text};
use iced::{Color, Element, Length, alignment};

const STRIKE_THICKNESS: f32 = 1.0;

/// Props for a text label with a line through it.
#[derive(Debug, Clone)]
pub(crate) struct StrikethroughTextProps {
    pub(crate) content: String,
    pub(crate) size: f32,
    pub(crate) color: Color,
}

/// Render the label with a centered rule drawn over it.
pub(crate) fn view<'a, Message: 'a>(
    props: StrikethroughTextProps,
) -> Element<'a, Message> {
    let color = props.color;
    let label = text(props.content).size(props.size).color(color);

    let rule = container(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(STRIKE_THICKNESS)),
    )
    .style(move |_| container::Style {
        background: Some(color.into()),
        ..Default::default()
    });

    let rule_layer = container(rule)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    Stack::new().push(label).push(rule_layer).into()
}
