use iced::widget::{Space, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::HeaderIntent;
use super::super::model::HeaderViewModel;
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{BELL, HEART, MENU, SHOPPING_CART};
use crate::shared::ui::style::fill_style;
use crate::shared::ui::theme::ThemeProps;

pub(crate) const HEADER_HEIGHT: f32 = 64.0;
const HEADER_HORIZONTAL_PADDING: f32 = 16.0;
const MENU_BUTTON_SIZE: f32 = 36.0;
const MENU_ICON_SIZE: f32 = 24.0;
const ACTION_ICON_SIZE: f32 = 20.0;
const LEFT_SPACING: f32 = 16.0;
const ACTIONS_SPACING: f32 = 20.0;

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) vm: HeaderViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the black header with the menu toggle and shop icons.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, HeaderIntent> {
    let palette = props.theme.theme.iced_palette();

    let menu_button = icon_button_view(IconButtonProps {
        icon: MENU,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|_| HeaderIntent::ToggleSidebar);

    let brand = text(props.vm.brand)
        .size(props.vm.brand_size)
        .font(props.fonts.emphasis.bold)
        .color(palette.foreground);

    let left = row![menu_button, brand]
        .spacing(LEFT_SPACING)
        .align_y(alignment::Vertical::Center);

    let action = |icon: &'static [u8]| {
        icon_view(IconProps {
            icon,
            size: ACTION_ICON_SIZE,
            color: palette.foreground,
            hover_color: Some(palette.dim_foreground),
        })
    };

    let actions = if props.vm.show_secondary_actions {
        row![action(HEART), action(SHOPPING_CART), action(BELL)]
    } else {
        row![action(SHOPPING_CART)]
    }
    .spacing(ACTIONS_SPACING)
    .align_y(alignment::Vertical::Center);

    let content = row![left, Space::new().width(Length::Fill), actions]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_HORIZONTAL_PADDING])
        .style(fill_style(palette.background, palette.foreground, 0.0))
        .into()
}
