use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length, alignment};

use super::super::event::CourseNavIntent;
use super::super::model::{
    COURSE_NAV_WIDTH, CourseNavViewModel, SectionViewModel,
};
use crate::catalog::Lesson;
use crate::components::primitive::icon::{IconProps, view as icon_view};
use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{
    CHEVRON_DOWN, CHEVRON_LEFT, CHEVRON_UP, CLOSE, PLAY,
};
use crate::shared::ui::style::{
    fill_style, text_button_style, thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const SIDEBAR_PADDING: f32 = 16.0;
const SECTION_SPACING: f32 = 8.0;
const LESSON_SPACING: f32 = 4.0;
const LESSON_INDENT: f32 = 16.0;
const LESSON_PADDING: f32 = 8.0;
const LESSON_MARKER_SIZE: f32 = 20.0;
const CLOSE_BUTTON_SIZE: f32 = 28.0;
const CLOSE_ICON_SIZE: f32 = 20.0;
const CHEVRON_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 18.0;
const BADGE_RADIUS: f32 = 4.0;

/// Props for rendering the lesson sidebar.
#[derive(Debug, Clone)]
pub(crate) struct LessonSidebarProps<'a> {
    pub(crate) vm: CourseNavViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar with collapsible course sections.
pub(crate) fn view<'a>(
    props: LessonSidebarProps<'a>,
) -> Element<'a, CourseNavIntent> {
    let LessonSidebarProps { vm, theme, fonts } = props;
    let palette = theme.theme.iced_palette();

    let mut content = Column::new().spacing(SECTION_SPACING);

    if vm.show_close_button() {
        let close = icon_button_view(IconButtonProps {
            icon: CLOSE,
            theme,
            size: CLOSE_BUTTON_SIZE,
            icon_size: CLOSE_ICON_SIZE,
            variant: IconButtonVariant::Subtle,
        })
        .map(|_| CourseNavIntent::ToggleSidebar);

        content = content.push(
            container(close)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );
    }

    content = content
        .push(back_link(palette, fonts))
        .push(
            text("Course")
                .size(HEADING_SIZE)
                .font(fonts.emphasis.semibold)
                .color(palette.foreground),
        )
        .push(
            text(vm.course_title)
                .size(fonts.small_size())
                .color(palette.dim_foreground),
        );

    for section in &vm.sections {
        content = content.push(section_block(*section, palette, fonts));
    }

    let scroll = scrollable(content.padding(SIDEBAR_PADDING))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette.dim_foreground));

    container(scroll)
        .width(Length::Fixed(COURSE_NAV_WIDTH))
        .height(Length::Fill)
        .style(fill_style(palette.background, palette.foreground, 0.0))
        .into()
}

/// Inert navigation link back to the catalog.
fn back_link<'a>(
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CourseNavIntent> {
    let label = row![
        icon_view(IconProps {
            icon: CHEVRON_LEFT,
            size: CHEVRON_SIZE,
            color: palette.dim_foreground,
            hover_color: None,
        }),
        text("Back to courses").size(fonts.small_size()),
    ]
    .spacing(LESSON_SPACING)
    .align_y(alignment::Vertical::Center);

    button(label)
        .padding(0.0)
        .style(text_button_style(palette.dim_foreground, palette.foreground))
        .into()
}

fn section_block<'a>(
    section: SectionViewModel<'a>,
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CourseNavIntent> {
    let chevron = if section.is_expanded {
        CHEVRON_UP
    } else {
        CHEVRON_DOWN
    };

    let header = row![
        text(section.title)
            .size(fonts.small_size())
            .font(fonts.emphasis.semibold)
            .width(Length::Fill),
        icon_view(IconProps {
            icon: chevron,
            size: CHEVRON_SIZE,
            color: palette.dim_foreground,
            hover_color: None,
        }),
    ]
    .spacing(LESSON_SPACING)
    .align_y(alignment::Vertical::Center);

    let toggle = button(header)
        .width(Length::Fill)
        .padding([LESSON_PADDING, 0.0])
        .on_press(CourseNavIntent::ToggleSection {
            index: section.index,
        })
        .style(text_button_style(palette.foreground, palette.highlight));

    let visible = section.visible_lessons();
    if visible.is_empty() {
        return toggle.into();
    }

    let lessons = visible
        .iter()
        .fold(Column::new().spacing(LESSON_SPACING), |lessons, lesson| {
            lessons.push(lesson_row(lesson, palette, fonts))
        });

    column![toggle, container(lessons).padding([0.0, LESSON_INDENT])]
        .spacing(LESSON_SPACING)
        .into()
}

fn lesson_row<'a>(
    lesson: &'a Lesson,
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CourseNavIntent> {
    let marker: Element<'a, CourseNavIntent> = if lesson.is_preview {
        icon_view(IconProps {
            icon: PLAY,
            size: LESSON_MARKER_SIZE,
            color: palette.highlight,
            hover_color: None,
        })
    } else {
        container(text(lesson.id.to_string()).size(fonts.caption_size()))
            .width(Length::Fixed(LESSON_MARKER_SIZE))
            .height(Length::Fixed(LESSON_MARKER_SIZE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(lesson_marker_style(palette))
            .into()
    };

    let mut details = column![
        text(lesson.title.as_str())
            .size(fonts.small_size())
            .color(palette.foreground),
        text(lesson.duration.as_str())
            .size(fonts.caption_size())
            .color(palette.dim_foreground),
    ]
    .spacing(2.0)
    .width(Length::Fill);

    if lesson.is_preview {
        details = details.push(preview_badge(palette, fonts));
    }

    row![marker, details]
        .spacing(LESSON_PADDING)
        .padding([LESSON_PADDING / 2.0, 0.0])
        .align_y(alignment::Vertical::Top)
        .into()
}

fn lesson_marker_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let outline = palette.outline;
    let text_color = palette.dim_foreground;
    move |_| container::Style {
        text_color: Some(text_color),
        border: iced::Border {
            width: 1.0,
            color: outline,
            radius: (LESSON_MARKER_SIZE / 2.0).into(),
        },
        ..Default::default()
    }
}

fn preview_badge<'a>(
    palette: &IcedColorPalette,
    fonts: &FontsConfig,
) -> Element<'a, CourseNavIntent> {
    container(text("Preview").size(fonts.caption_size()))
        .padding([2.0, 6.0])
        .style(fill_style(palette.badge, palette.badge_text, BADGE_RADIUS))
        .into()
}
