use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::course_nav::CourseNavIntent;
use crate::widgets::header::{HeaderEffect, HeaderEvent};

/// Route a header event through the widget reducer or out as an effect.
pub(crate) fn route(app: &mut App, event: HeaderEvent) -> Task<AppEvent> {
    match event {
        HeaderEvent::Intent(intent) => app
            .widgets
            .header
            .reduce(intent)
            .map(|effect| AppEvent::Header(HeaderEvent::Effect(effect))),
        HeaderEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a header effect event to an app-level task.
pub(crate) fn route_effect(effect: HeaderEffect) -> Task<AppEvent> {
    Task::done(effect_event(effect))
}

/// App event that carries out a header effect.
pub(crate) fn effect_event(effect: HeaderEffect) -> AppEvent {
    match effect {
        HeaderEffect::ToggleSidebar => {
            AppEvent::CourseNav(CourseNavIntent::ToggleSidebar)
        },
    }
}
