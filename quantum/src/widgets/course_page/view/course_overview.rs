use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::CoursePageEvent;
use super::super::model::PageLayout;
use crate::catalog::{Course, Publisher};
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::placeholder_image::{
    PlaceholderImageProps, view as placeholder_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{BELL, PLAY, STAR};
use crate::shared::ui::style::muted_panel_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const BLOCK_SPACING: f32 = 32.0;
const HEADING_SPACING: f32 = 16.0;
const GRID_SPACING: f32 = 16.0;
const DETAIL_ICON_SIZE: f32 = 16.0;
const PANEL_PADDING: f32 = 16.0;
const AVATAR_SIZE: f32 = 64.0;

/// Props for rendering the description, course details and publisher.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CourseOverviewProps<'a> {
    pub(crate) course: &'a Course,
    pub(crate) layout: PageLayout,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

pub(crate) fn view<'a>(
    props: CourseOverviewProps<'a>,
) -> Element<'a, CoursePageEvent> {
    let CourseOverviewProps {
        course,
        layout,
        theme,
        fonts,
    } = props;
    let palette = theme.theme.iced_palette();

    let heading = |label: &'static str| {
        text(label)
            .size(layout.heading_size)
            .font(fonts.emphasis.bold)
            .color(palette.text)
    };

    let description = column![
        heading("Description"),
        text(course.overview.as_str())
            .size(fonts.body_size())
            .color(palette.muted_text),
    ]
    .spacing(HEADING_SPACING);

    let details = [
        ("Lessons", PLAY, course.lessons.to_string()),
        ("Duration", BELL, course.duration.clone()),
        ("Skill level", STAR, course.level.clone()),
    ];
    let cells: Vec<Element<'a, CoursePageEvent>> = details
        .into_iter()
        .map(|(label, icon, value)| {
            detail_cell(label, icon, value, palette, fonts)
        })
        .collect();

    let details = column![
        heading("Course details"),
        grid(cells, layout.detail_columns),
    ]
    .spacing(HEADING_SPACING);

    let publisher = column![
        heading("Publisher"),
        publisher_panel(&course.publisher, palette, fonts),
    ]
    .spacing(HEADING_SPACING);

    column![description, details, publisher]
        .spacing(BLOCK_SPACING)
        .width(Length::Fill)
        .into()
}

fn detail_cell<'a>(
    label: &'static str,
    icon: &'static [u8],
    value: String,
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CoursePageEvent> {
    column![
        text(label)
            .size(fonts.body_size())
            .font(fonts.emphasis.semibold)
            .color(palette.text),
        row![
            icon_view(IconProps {
                icon,
                size: DETAIL_ICON_SIZE,
                color: palette.dim_foreground,
                hover_color: None,
            }),
            text(value).size(fonts.body_size()).color(palette.muted_text),
        ]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center),
    ]
    .spacing(8.0)
    .width(Length::Fill)
    .into()
}

/// Lay cells out left to right in rows of `columns`, padding the last row.
fn grid<'a>(
    cells: Vec<Element<'a, CoursePageEvent>>,
    columns: usize,
) -> Element<'a, CoursePageEvent> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(GRID_SPACING);
    let mut current = Row::new().spacing(GRID_SPACING);
    let mut filled = 0;

    for cell in cells {
        current = current.push(cell);
        filled += 1;

        if filled == columns {
            rows = rows.push(current);
            current = Row::new().spacing(GRID_SPACING);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            current = current.push(Space::new().width(Length::Fill));
        }
        rows = rows.push(current);
    }

    rows.width(Length::Fill).into()
}

fn publisher_panel<'a>(
    publisher: &'a Publisher,
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CoursePageEvent> {
    let identity = row![
        placeholder_view(PlaceholderImageProps::square(AVATAR_SIZE)),
        column![
            text(publisher.name.as_str())
                .size(fonts.body_size() + 2.0)
                .font(fonts.emphasis.bold)
                .color(palette.text),
            text(publisher.role.as_str())
                .size(fonts.body_size())
                .color(palette.muted_text),
        ],
    ]
    .spacing(16.0)
    .align_y(alignment::Vertical::Center);

    let stat = |value: String, emphasized: bool| {
        let font = if emphasized {
            fonts.emphasis.semibold
        } else {
            fonts.ui.font_type
        };
        text(value)
            .size(fonts.small_size())
            .font(font)
            .color(palette.text)
    };

    let stats = row![
        column![
            stat(format!("{} Instructor Rating", publisher.rating), true),
            stat(format!("{} Reviews", publisher.reviews), false),
        ]
        .width(Length::Fill),
        column![
            stat(format!("{} Students", publisher.students), true),
            stat(format!("{} Courses", publisher.courses), false),
        ]
        .width(Length::Fill),
    ]
    .spacing(GRID_SPACING);

    let mut content = Column::new().spacing(16.0).push(identity);
    if !publisher.bio.is_empty() {
        content = content.push(
            text(publisher.bio.as_str())
                .size(fonts.body_size())
                .color(palette.muted_text),
        );
    }

    container(content.push(stats))
        .width(Length::Fill)
        .padding(PANEL_PADDING)
        .style(muted_panel_style(palette))
        .into()
}
