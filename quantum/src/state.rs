use iced::Size;

use crate::layout::Viewport;

/// Window geometry state.
#[derive(Debug)]
pub(crate) struct State {
    window_size: Size,
    viewport: Viewport,
}

impl State {
    /// Create state for the initial window size.
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            viewport: Viewport::from_width(window_size.width),
        }
    }

    pub(crate) fn window_size(&self) -> Size {
        self.window_size
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new window size; returns `true` if the viewport class changed.
    pub(crate) fn set_window_size(&mut self, size: Size) -> bool {
        self.window_size = size;

        let viewport = Viewport::from_width(size.width);
        let changed = viewport != self.viewport;
        self.viewport = viewport;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_resize_across_breakpoint_when_recorded_then_change_is_reported() {
        let mut state = State::new(Size::new(1280.0, 800.0));
        assert_eq!(state.viewport(), Viewport::Large);

        assert!(state.set_window_size(Size::new(700.0, 800.0)));
        assert_eq!(state.viewport(), Viewport::Small);
        assert_eq!(state.window_size().width, 700.0);

        assert!(!state.set_window_size(Size::new(720.0, 600.0)));
        assert_eq!(state.window_size().width, 720.0);
    }
}
