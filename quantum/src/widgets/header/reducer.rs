use iced::Task;

use super::event::{HeaderEffect, HeaderIntent};

/// Reduce a header intent into effect tasks.
pub(crate) fn reduce(event: HeaderIntent) -> Task<HeaderEffect> {
    Task::done(effect_for(event))
}

/// Map a header intent to the effect it requests.
fn effect_for(event: HeaderIntent) -> HeaderEffect {
    match event {
        HeaderIntent::ToggleSidebar => HeaderEffect::ToggleSidebar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_menu_press_when_mapped_then_sidebar_toggle_effect_is_requested() {
        assert_eq!(
            effect_for(HeaderIntent::ToggleSidebar),
            HeaderEffect::ToggleSidebar
        );
    }
}
