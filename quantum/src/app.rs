#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::catalog::Course;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::course_nav::{CourseNavIntent, CourseNavWidget};
use crate::widgets::course_page::{CoursePageEvent, CoursePageWidget};
use crate::widgets::header::{BRAND_NAME, HeaderEvent, HeaderWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Header widget
    Header(HeaderEvent),
    // Lesson sidebar widget
    CourseNav(CourseNavIntent),
    // Course page widget
    CoursePage(CoursePageEvent),
    // Direct operations
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) header: HeaderWidget,
    pub(crate) course_nav: CourseNavWidget,
    pub(crate) course_page: CoursePageWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) course: Arc<Course>,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(course: Arc<Course>) -> (Self, Task<AppEvent>) {
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let state = State::new(window_size);
        log::info!(
            "showing \"{}\" in a {:?} viewport",
            course.title,
            state.viewport()
        );

        let widgets = Widgets {
            header: HeaderWidget::new(),
            course_nav: CourseNavWidget::new(),
            course_page: CoursePageWidget::new(),
        };

        let app = App {
            course,
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            state,
            widgets,
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        format!("{} - {}", self.course.title, BRAND_NAME)
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
