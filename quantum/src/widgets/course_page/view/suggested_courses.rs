use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::CoursePageEvent;
use crate::catalog::SuggestedCourse;
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::placeholder_image::{
    PlaceholderImageProps, view as placeholder_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::STAR;
use crate::shared::ui::style::muted_panel_style;
use crate::shared::ui::theme::ThemeProps;

const THUMBNAIL_SIZE: f32 = 80.0;
const ENTRY_PADDING: f32 = 16.0;
const ENTRY_SPACING: f32 = 16.0;

/// Props for rendering the suggested courses list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SuggestedCoursesProps<'a> {
    pub(crate) courses: &'a [SuggestedCourse],
    pub(crate) heading_size: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render related courses as thumbnail cards.
pub(crate) fn view<'a>(
    props: SuggestedCoursesProps<'a>,
) -> Element<'a, CoursePageEvent> {
    let palette = props.theme.theme.iced_palette();
    let fonts = props.fonts;

    let entries = props.courses.iter().fold(
        Column::new().spacing(ENTRY_SPACING),
        |entries, course| {
            let rating = row![
                icon_view(IconProps {
                    icon: STAR,
                    size: fonts.small_size(),
                    color: palette.star,
                    hover_color: None,
                }),
                text(format!("{:.1}", course.rating))
                    .size(fonts.small_size())
                    .color(palette.text),
            ]
            .spacing(4.0)
            .align_y(alignment::Vertical::Center);

            let summary = column![
                text(course.title.as_str())
                    .size(fonts.body_size())
                    .font(fonts.emphasis.bold)
                    .color(palette.text),
                text(format!("By {}", course.author))
                    .size(fonts.small_size())
                    .color(palette.muted_text),
                rating,
            ]
            .spacing(4.0);

            entries.push(
                container(
                    row![
                        placeholder_view(PlaceholderImageProps::square(
                            THUMBNAIL_SIZE
                        )),
                        summary,
                    ]
                    .spacing(ENTRY_SPACING)
                    .align_y(alignment::Vertical::Center),
                )
                .width(Length::Fill)
                .padding(ENTRY_PADDING)
                .style(muted_panel_style(palette)),
            )
        },
    );

    column![
        text("Suggested courses")
            .size(props.heading_size)
            .font(fonts.emphasis.bold)
            .color(palette.text),
        entries,
    ]
    .spacing(ENTRY_SPACING)
    .width(Length::Fill)
    .into()
}
