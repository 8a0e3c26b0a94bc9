use iced::widget::{Stack, column, container, row};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::layout::SidebarPlacement;
use crate::shared::ui::style::fill_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::course_nav::view::lesson_sidebar;
use crate::widgets::course_page::view::course_content;
use crate::widgets::header::HeaderEvent;
use crate::widgets::header::view::top_bar;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = theme.iced_palette();
    let viewport = app.state.viewport();

    let header = top_bar::view(top_bar::TopBarProps {
        vm: app.widgets.header.vm(viewport),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Header(HeaderEvent::Intent(intent)));

    let page = course_content::view(course_content::CourseContentProps {
        vm: app.widgets.course_page.vm(&app.course, viewport),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::CoursePage);

    let nav_vm = app.widgets.course_nav.vm(&app.course, viewport);
    let placement = nav_vm.placement;
    let sidebar = placement.is_visible().then(|| {
        lesson_sidebar::view(lesson_sidebar::LessonSidebarProps {
            vm: nav_vm,
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(AppEvent::CourseNav)
    });

    let (body, overlay): (Element<'_, AppEvent, Theme, iced::Renderer>, _) =
        match (placement, sidebar) {
            (SidebarPlacement::InFlow, Some(sidebar)) => (
                row![sidebar, page]
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
                None,
            ),
            (_, sidebar) => (page, sidebar),
        };

    let base = container(
        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(fill_style(palette.background, palette.foreground, 0.0));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(sidebar) = overlay {
        layers = layers.push(
            container(sidebar)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );
    }

    layers.into()
}
