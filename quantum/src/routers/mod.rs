use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod course_nav;
pub(crate) mod header;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Header widget
        AppEvent::Header(event) => header::route(app, event),
        // Lesson sidebar widget
        AppEvent::CourseNav(intent) => course_nav::route_event(app, intent),
        // Course page widget
        AppEvent::CoursePage(event) => match event {},
        // Direct operations
        AppEvent::Window(iced::window::Event::Opened { size, .. }) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iced::Size;
    use iced::window::Event as WindowEvent;

    use super::*;
    use crate::catalog::load_embedded;
    use crate::layout::{SidebarPlacement, Viewport};
    use crate::widgets::course_nav::CourseNavIntent;
    use crate::widgets::header::HeaderEffect;

    fn app() -> App {
        let course = load_embedded().expect("embedded catalog should load");
        let (app, _) = App::new(Arc::new(course));
        app
    }

    #[test]
    fn given_section_toggle_when_routed_then_sidebar_state_changes() {
        let mut app = app();

        let _ = route(
            &mut app,
            AppEvent::CourseNav(CourseNavIntent::ToggleSection { index: 2 }),
        );

        let vm = app.widgets.course_nav.vm(&app.course, Viewport::Large);
        let expanded: Vec<bool> =
            vm.sections.iter().map(|section| section.is_expanded).collect();
        assert_eq!(expanded, vec![true, false, true]);
    }

    #[test]
    fn given_resize_below_large_when_routed_then_sidebar_leaves_the_flow() {
        let mut app = app();
        assert_eq!(app.state.viewport(), Viewport::Large);

        let _ = route(
            &mut app,
            AppEvent::Window(WindowEvent::Resized(Size::new(700.0, 800.0))),
        );

        assert_eq!(app.state.viewport(), Viewport::Small);
        assert_eq!(
            app.widgets.course_nav.placement(app.state.viewport()),
            SidebarPlacement::Hidden
        );
    }

    #[test]
    fn given_sidebar_toggle_when_routed_on_narrow_window_then_overlay_opens() {
        let mut app = app();
        let _ = route(
            &mut app,
            AppEvent::Window(WindowEvent::Resized(Size::new(500.0, 800.0))),
        );

        let toggle = AppEvent::CourseNav(CourseNavIntent::ToggleSidebar);
        let _ = route(&mut app, toggle);

        assert_eq!(
            app.widgets.course_nav.placement(app.state.viewport()),
            SidebarPlacement::Overlay
        );
    }

    #[test]
    fn given_menu_toggle_effect_when_forwarded_then_sidebar_opens_and_closes() {
        let mut app = app();
        let _ = route(
            &mut app,
            AppEvent::Window(WindowEvent::Resized(Size::new(500.0, 800.0))),
        );

        let _ = route(
            &mut app,
            header::effect_event(HeaderEffect::ToggleSidebar),
        );
        assert_eq!(
            app.widgets.course_nav.placement(app.state.viewport()),
            SidebarPlacement::Overlay
        );

        let _ = route(
            &mut app,
            header::effect_event(HeaderEffect::ToggleSidebar),
        );
        assert_eq!(
            app.widgets.course_nav.placement(app.state.viewport()),
            SidebarPlacement::Hidden
        );
    }
}
