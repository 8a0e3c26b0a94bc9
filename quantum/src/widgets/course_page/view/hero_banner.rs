use iced::widget::{Space, Stack, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::CoursePageEvent;
use super::super::model::PageLayout;
use crate::catalog::Course;
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::placeholder_image::{
    PlaceholderImageProps, view as placeholder_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{HEART, MORE_HORIZONTAL, PLAY, SHARE, STAR};
use crate::shared::ui::style::fill_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const HERO_RADIUS: f32 = 16.0;
const BANNER_PADDING: f32 = 24.0;
const PLAY_BUTTON_PADDING: f32 = 16.0;
const PLAY_BUTTON_ALPHA: f32 = 0.3;
const AVATAR_SIZE: f32 = 48.0;
const STRIP_PADDING: f32 = 16.0;
const STRIP_SPACING: f32 = 16.0;
const META_ICON_SIZE: f32 = 20.0;

/// Props for rendering the hero banner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeroBannerProps<'a> {
    pub(crate) course: &'a Course,
    pub(crate) layout: PageLayout,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the course cover, title block and publisher strip.
pub(crate) fn view<'a>(
    props: HeroBannerProps<'a>,
) -> Element<'a, CoursePageEvent> {
    let HeroBannerProps {
        course,
        layout,
        theme,
        fonts,
    } = props;
    let palette = theme.theme.iced_palette();

    let cover = Stack::new()
        .push(placeholder_view(PlaceholderImageProps {
            width: Length::Fill,
            height: Length::Fill,
        }))
        .push(
            container(play_button(palette, layout))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(fill_style(palette.scrim, palette.foreground, 0.0)),
        );

    let cover = container(cover)
        .width(Length::Fill)
        .height(Length::Fixed(layout.hero_height))
        .style(fill_style(palette.banner, palette.foreground, 0.0));

    let rating_line = row![
        icon_view(IconProps {
            icon: STAR,
            size: fonts.small_size(),
            color: palette.star,
            hover_color: None,
        }),
        text(format!("{:.1}", course.rating)).size(fonts.small_size()),
        text(format!("{} students", course.students))
            .size(fonts.small_size()),
    ]
    .spacing(6.0)
    .align_y(alignment::Vertical::Center);

    let title_block = container(
        column![
            text(course.title.to_uppercase())
                .size(layout.title_size)
                .font(fonts.emphasis.bold),
            text(course.description.as_str()).size(layout.subtitle_size),
            rating_line,
        ]
        .spacing(8.0),
    )
    .width(Length::Fill)
    .padding(BANNER_PADDING)
    .style(fill_style(palette.banner, palette.foreground, HERO_RADIUS));

    column![cover, title_block, publisher_strip(course, palette, fonts)]
        .width(Length::Fill)
        .into()
}

fn play_button<'a>(
    palette: &IcedColorPalette,
    layout: PageLayout,
) -> Element<'a, CoursePageEvent> {
    let mut backdrop = palette.foreground;
    backdrop.a = PLAY_BUTTON_ALPHA;
    let diameter = layout.hero_play_size + 2.0 * PLAY_BUTTON_PADDING;

    container(icon_view(IconProps {
        icon: PLAY,
        size: layout.hero_play_size,
        color: palette.foreground,
        hover_color: None,
    }))
    .padding(PLAY_BUTTON_PADDING)
    .style(fill_style(backdrop, palette.foreground, diameter / 2.0))
    .into()
}

fn publisher_strip<'a>(
    course: &'a Course,
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CoursePageEvent> {
    let publisher = &course.publisher;

    let identity = row![
        placeholder_view(PlaceholderImageProps::square(AVATAR_SIZE)),
        column![
            text(publisher.name.as_str())
                .size(fonts.body_size())
                .font(fonts.emphasis.bold)
                .color(palette.text),
            text(publisher.role.as_str())
                .size(fonts.small_size())
                .color(palette.muted_text),
        ],
    ]
    .spacing(STRIP_SPACING)
    .align_y(alignment::Vertical::Center);

    let meta_icon = |icon: &'static [u8]| {
        icon_view(IconProps {
            icon,
            size: META_ICON_SIZE,
            color: palette.dim_foreground,
            hover_color: None,
        })
    };

    let meta = row![
        row![meta_icon(HEART), text(course.likes.to_string())]
            .spacing(4.0)
            .align_y(alignment::Vertical::Center),
        row![meta_icon(SHARE), text("Share")]
            .spacing(4.0)
            .align_y(alignment::Vertical::Center),
        meta_icon(MORE_HORIZONTAL),
    ]
    .spacing(STRIP_SPACING)
    .align_y(alignment::Vertical::Center);

    container(
        row![identity, Space::new().width(Length::Fill), meta]
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding([STRIP_PADDING, STRIP_PADDING + 12.0])
    .style(fill_style(palette.surface, palette.text, 0.0))
    .into()
}
