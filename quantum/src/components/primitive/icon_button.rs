use iced::widget::{button, container};
use iced::{Background, Border, Color, Element, Length, alignment};

use super::icon::{IconProps, view as icon_view};
use crate::shared::ui::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button on dark chrome.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    /// Bright icon that dims on hover.
    Standard,
    /// Dim icon that brightens on hover.
    Subtle,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const HOVER_BACKDROP_ALPHA: f32 = 0.12;

/// Render a square icon button with a soft round backdrop on hover.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (color, hover_color) = variant_colors(
        props.variant,
        palette.foreground,
        palette.dim_foreground,
    );

    let icon = container(icon_view(IconProps {
        icon: props.icon,
        size: props.icon_size,
        color,
        hover_color: Some(hover_color),
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut backdrop = palette.foreground;
    backdrop.a = HOVER_BACKDROP_ALPHA;
    let radius = props.size / 2.0;

    button(icon)
        .on_press(IconButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| button::Style {
            background: hover_backdrop(status, backdrop).map(Background::Color),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

fn variant_colors(
    variant: IconButtonVariant,
    bright: Color,
    dim: Color,
) -> (Color, Color) {
    match variant {
        IconButtonVariant::Standard => (bright, dim),
        IconButtonVariant::Subtle => (dim, bright),
    }
}

fn hover_backdrop(status: button::Status, backdrop: Color) -> Option<Color> {
    match status {
        button::Status::Hovered | button::Status::Pressed => Some(backdrop),
        button::Status::Active | button::Status::Disabled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRIGHT: Color = Color::WHITE;
    const DIM: Color = Color::from_rgb(0.6, 0.6, 0.6);

    #[test]
    fn given_standard_variant_when_resolving_colors_then_hover_dims() {
        assert_eq!(
            variant_colors(IconButtonVariant::Standard, BRIGHT, DIM),
            (BRIGHT, DIM)
        );
    }

    #[test]
    fn given_subtle_variant_when_resolving_colors_then_hover_brightens() {
        assert_eq!(
            variant_colors(IconButtonVariant::Subtle, BRIGHT, DIM),
            (DIM, BRIGHT)
        );
    }

    #[test]
    fn given_idle_button_when_styling_then_backdrop_is_hidden() {
        let backdrop = Color::BLACK;

        assert_eq!(hover_backdrop(button::Status::Active, backdrop), None);
        assert_eq!(
            hover_backdrop(button::Status::Hovered, backdrop),
            Some(backdrop)
        );
    }
}
