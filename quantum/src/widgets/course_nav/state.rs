use std::collections::BTreeSet;

/// Section expansion and sidebar visibility for the course view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CourseNavState {
    expanded_sections: BTreeSet<usize>,
    sidebar_open: bool,
}

impl Default for CourseNavState {
    fn default() -> Self {
        Self {
            expanded_sections: BTreeSet::from([0]),
            sidebar_open: false,
        }
    }
}

impl CourseNavState {
    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.expanded_sections.contains(&index)
    }

    pub(crate) fn expanded_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded_sections.iter().copied()
    }

    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Flip membership of `index` and return whether it is now expanded.
    pub(crate) fn toggle_section(&mut self, index: usize) -> bool {
        if self.expanded_sections.remove(&index) {
            false
        } else {
            self.expanded_sections.insert(index);
            true
        }
    }

    /// Flip the sidebar flag and return the new value.
    pub(crate) fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_state_when_inspected_then_only_first_section_is_expanded() {
        let state = CourseNavState::default();

        assert_eq!(state.expanded_sections().collect::<Vec<_>>(), vec![0]);
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn given_expanded_section_when_toggled_then_it_collapses() {
        let mut state = CourseNavState::default();

        assert!(!state.toggle_section(0));
        assert!(!state.is_expanded(0));
        assert_eq!(state.expanded_sections().count(), 0);
    }

    #[test]
    fn given_any_section_when_toggled_twice_then_state_is_unchanged() {
        for index in 0..4 {
            let mut state = CourseNavState::default();
            let before = state.clone();

            state.toggle_section(index);
            assert_ne!(state, before);
            state.toggle_section(index);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn given_several_sections_when_expanding_one_then_others_keep_membership() {
        let mut state = CourseNavState::default();

        assert!(state.toggle_section(2));

        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn given_sidebar_flag_when_toggled_twice_then_original_value_returns() {
        let mut state = CourseNavState::default();

        assert!(state.toggle_sidebar());
        assert!(!state.toggle_sidebar());
        assert!(!state.is_sidebar_open());
    }
}
