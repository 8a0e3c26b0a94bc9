use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::CoursePageEvent;
use super::super::model::{discount_label, format_price};
use crate::catalog::{Course, IncludeKind};
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::strikethrough_text::{
    StrikethroughTextProps, view as strikethrough_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{BELL, PLAY, SHOPPING_CART, STAR};
use crate::shared::ui::style::{
    card_style, fill_style, filled_button_style, outline_button_style,
};
use crate::shared::ui::theme::ThemeProps;

const CARD_PADDING: f32 = 24.0;
const CARD_SPACING: f32 = 16.0;
const PRICE_SIZE: f32 = 30.0;
const BADGE_RADIUS: f32 = 4.0;
const BUTTON_PADDING: f32 = 8.0;
const INCLUDE_ICON_SIZE: f32 = 16.0;

/// Props for rendering the pricing card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PricingCardProps<'a> {
    pub(crate) course: &'a Course,
    pub(crate) width: Length,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render prices, call-to-action buttons and the includes list.
pub(crate) fn view<'a>(
    props: PricingCardProps<'a>,
) -> Element<'a, CoursePageEvent> {
    let PricingCardProps {
        course,
        width,
        theme,
        fonts,
    } = props;
    let palette = theme.theme.iced_palette();

    let badge = container(
        text(discount_label(course.discount_percent))
            .size(fonts.small_size()),
    )
    .padding([4.0, 8.0])
    .style(fill_style(palette.accent_soft, palette.accent, BADGE_RADIUS));

    let headline = row![
        text("Full course")
            .size(fonts.small_size())
            .color(palette.muted_text),
        Space::new().width(Length::Fill),
        badge,
    ]
    .align_y(alignment::Vertical::Center);

    let prices = row![
        text(format_price(course.discounted_price))
            .size(PRICE_SIZE)
            .font(fonts.emphasis.bold)
            .color(palette.text),
        strikethrough_view(StrikethroughTextProps {
            content: format_price(course.full_price),
            size: fonts.body_size(),
            color: palette.subtle_text,
        }),
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Bottom);

    let call_to_action = |label: &'static str| {
        container(text(label).size(fonts.body_size()))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
    };

    let add_to_cart = button(call_to_action("Add to cart"))
        .width(Length::Fill)
        .padding(BUTTON_PADDING)
        .style(filled_button_style(palette));
    let buy_now = button(call_to_action("Buy now"))
        .width(Length::Fill)
        .padding(BUTTON_PADDING)
        .style(outline_button_style(palette));

    let guarantee = container(
        text("30-day money-back guarantee")
            .size(fonts.small_size())
            .color(palette.muted_text),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let includes = course.includes.iter().fold(
        Column::new().spacing(8.0),
        |list, include| {
            list.push(
                row![
                    icon_view(IconProps {
                        icon: include_icon(include.kind),
                        size: INCLUDE_ICON_SIZE,
                        color: palette.dim_foreground,
                        hover_color: None,
                    }),
                    text(include.label.as_str())
                        .size(fonts.small_size())
                        .color(palette.muted_text),
                ]
                .spacing(8.0)
                .align_y(alignment::Vertical::Center),
            )
        },
    );

    let mut content = column![headline, prices, add_to_cart, buy_now, guarantee]
        .spacing(CARD_SPACING);

    if !course.includes.is_empty() {
        content = content.push(
            column![
                text("Course includes:")
                    .size(fonts.body_size())
                    .font(fonts.emphasis.bold)
                    .color(palette.text),
                includes,
            ]
            .spacing(8.0),
        );
    }

    container(content)
        .width(width)
        .padding(CARD_PADDING)
        .style(card_style(palette))
        .into()
}

fn include_icon(kind: IncludeKind) -> &'static [u8] {
    match kind {
        IncludeKind::Video => PLAY,
        IncludeKind::Article => STAR,
        IncludeKind::Resource => SHOPPING_CART,
        IncludeKind::Mobile => BELL,
    }
}
