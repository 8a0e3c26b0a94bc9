use super::event::CourseNavIntent;
use super::state::CourseNavState;

/// Read-only context for lesson sidebar reduction.
pub(crate) struct CourseNavCtx {
    pub(crate) section_count: usize,
}

/// Reduce a lesson sidebar intent into state updates.
pub(crate) fn reduce(
    state: &mut CourseNavState,
    event: CourseNavIntent,
    ctx: &CourseNavCtx,
) {
    match event {
        CourseNavIntent::ToggleSection { index } => {
            if index >= ctx.section_count {
                log::warn!(
                    "ignoring toggle for section {index}, course has {} sections",
                    ctx.section_count
                );
                return;
            }

            let expanded = state.toggle_section(index);
            log::debug!(
                "section {index} expanded: {expanded}, open sections: {:?}",
                state.expanded_sections().collect::<Vec<_>>()
            );
        },
        CourseNavIntent::ToggleSidebar => {
            let open = state.toggle_sidebar();
            log::debug!("sidebar open: {open}");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: CourseNavCtx = CourseNavCtx { section_count: 3 };

    #[test]
    fn given_absent_section_when_toggle_reduced_then_section_is_added() {
        let mut state = CourseNavState::default();

        reduce(&mut state, CourseNavIntent::ToggleSection { index: 1 }, &CTX);

        assert!(state.is_expanded(0));
        assert!(state.is_expanded(1));
    }

    #[test]
    fn given_out_of_range_section_when_toggle_reduced_then_state_is_unchanged()
    {
        let mut state = CourseNavState::default();
        let before = state.clone();

        reduce(&mut state, CourseNavIntent::ToggleSection { index: 3 }, &CTX);

        assert_eq!(state, before);
    }

    #[test]
    fn given_toggle_sidebar_when_reduced_twice_then_flag_round_trips() {
        let mut state = CourseNavState::default();

        reduce(&mut state, CourseNavIntent::ToggleSidebar, &CTX);
        assert!(state.is_sidebar_open());

        reduce(&mut state, CourseNavIntent::ToggleSidebar, &CTX);
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn given_sidebar_toggle_when_reduced_then_expansion_is_untouched() {
        let mut state = CourseNavState::default();

        reduce(&mut state, CourseNavIntent::ToggleSidebar, &CTX);

        assert_eq!(state.expanded_sections().collect::<Vec<_>>(), vec![0]);
    }
}
