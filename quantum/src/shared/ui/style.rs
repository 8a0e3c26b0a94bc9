use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Vector};

use super::theme::IcedColorPalette;

const CARD_RADIUS: f32 = 8.0;
const BUTTON_RADIUS: f32 = 8.0;
const SCROLLER_RADIUS: f32 = 4.0;
const SCROLLER_IDLE_ALPHA: f32 = 0.35;
const SCROLLER_ACTIVE_ALPHA: f32 = 0.6;

/// Narrow rounded scroller tinted with `scroller`, on a transparent rail.
pub(crate) fn thin_scroll_style(
    scroller: Color,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let alpha = match status {
            scrollable::Status::Hovered { .. }
            | scrollable::Status::Dragged { .. } => SCROLLER_ACTIVE_ALPHA,
            scrollable::Status::Active { .. } => SCROLLER_IDLE_ALPHA,
        };
        let thumb = Background::Color(Color {
            a: alpha,
            ..scroller
        });

        for rail in [&mut style.vertical_rail, &mut style.horizontal_rail] {
            rail.background = None;
            rail.border = Border::default();
            rail.scroller.background = thumb;
            rail.scroller.border.radius = SCROLLER_RADIUS.into();
        }

        style
    }
}

/// White card with a thin border and drop shadow.
pub(crate) fn card_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let surface = palette.surface;
    let border = palette.border;
    let text = palette.text;
    move |_| container::Style {
        background: Some(surface.into()),
        text_color: Some(text),
        border: Border {
            width: 1.0,
            color: border,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 6.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Light grey rounded panel.
pub(crate) fn muted_panel_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let background = palette.surface_muted;
    let text = palette.text;
    move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(text),
        border: Border {
            radius: CARD_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Flat background fill with an optional corner radius.
pub(crate) fn fill_style(
    background: Color,
    text: Color,
    radius: f32,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(background.into()),
        text_color: Some(text),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Solid accent call-to-action.
pub(crate) fn filled_button_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    let accent = palette.accent;
    let hover = palette.accent_hover;
    let text = palette.foreground;
    move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Active | button::Status::Disabled => accent,
        };

        button::Style {
            background: Some(background.into()),
            text_color: text,
            border: Border {
                radius: BUTTON_RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Accent outline call-to-action.
pub(crate) fn outline_button_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    let accent = palette.accent;
    let soft = palette.accent_soft;
    move |_, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(soft),
            button::Status::Active | button::Status::Disabled => None,
        };

        button::Style {
            background: background.map(Background::Color),
            text_color: accent,
            border: Border {
                width: 1.0,
                color: accent,
                radius: BUTTON_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text button that brightens on hover.
pub(crate) fn text_button_style(
    base: Color,
    hover: Color,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Active | button::Status::Disabled => base,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}
