use iced::widget::{column, container, row, scrollable};
use iced::{Element, Length};

use super::super::event::CoursePageEvent;
use super::super::model::{CoursePageViewModel, PRICING_CARD_WIDTH};
use super::course_overview::{self, CourseOverviewProps};
use super::hero_banner::{self, HeroBannerProps};
use super::pricing_card::{self, PricingCardProps};
use super::suggested_courses::{self, SuggestedCoursesProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style::{fill_style, thin_scroll_style};
use crate::shared::ui::theme::ThemeProps;

const SECTION_GAP: f32 = 32.0;
const HERO_GAP: f32 = 8.0;
const PAGE_RADIUS: f32 = 16.0;
const MAX_CONTENT_WIDTH: f32 = 1280.0;

/// Props for rendering the scrollable course page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CourseContentProps<'a> {
    pub(crate) vm: CoursePageViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the page sections on a white scrollable surface.
pub(crate) fn view<'a>(
    props: CourseContentProps<'a>,
) -> Element<'a, CoursePageEvent> {
    let CourseContentProps { vm, theme, fonts } = props;
    let layout = vm.layout;
    let course = vm.course;
    let palette = theme.theme.iced_palette();

    let hero = hero_banner::view(HeroBannerProps {
        course,
        layout,
        theme,
        fonts,
    });

    let pricing_width = if layout.stack_pricing {
        Length::Fill
    } else {
        Length::Fixed(PRICING_CARD_WIDTH)
    };
    let pricing = pricing_card::view(PricingCardProps {
        course,
        width: pricing_width,
        theme,
        fonts,
    });

    let top: Element<'a, CoursePageEvent> = if layout.stack_pricing {
        column![hero, pricing].spacing(SECTION_GAP).into()
    } else {
        row![hero, pricing].spacing(HERO_GAP).into()
    };

    let overview = course_overview::view(CourseOverviewProps {
        course,
        layout,
        theme,
        fonts,
    });
    let suggested = suggested_courses::view(SuggestedCoursesProps {
        courses: course.suggested_courses.as_slice(),
        heading_size: layout.heading_size,
        theme,
        fonts,
    });

    let bottom: Element<'a, CoursePageEvent> = if layout.split_columns {
        row![
            container(overview).width(Length::FillPortion(2)),
            container(suggested).width(Length::FillPortion(1)),
        ]
        .spacing(SECTION_GAP)
        .into()
    } else {
        column![overview, suggested].spacing(SECTION_GAP).into()
    };

    let page = container(
        column![top, bottom]
            .spacing(SECTION_GAP)
            .max_width(MAX_CONTENT_WIDTH),
    )
    .width(Length::Fill)
    .padding(layout.content_padding)
    .center_x(Length::Fill);

    let scroll = scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette.subtle_text));

    container(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(fill_style(palette.surface, palette.text, PAGE_RADIUS))
        .into()
}
