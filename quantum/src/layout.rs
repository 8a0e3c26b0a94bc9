/// Minimum width of the small breakpoint.
pub(crate) const BREAKPOINT_SMALL: f32 = 640.0;
/// Minimum width of the medium breakpoint.
pub(crate) const BREAKPOINT_MEDIUM: f32 = 768.0;
/// Minimum width at which the lesson sidebar becomes part of the layout.
pub(crate) const BREAKPOINT_LARGE: f32 = 1024.0;

/// Width class of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Viewport {
    Compact,
    Small,
    Medium,
    Large,
}

impl Viewport {
    /// Classify a window width.
    pub(crate) fn from_width(width: f32) -> Self {
        if width >= BREAKPOINT_LARGE {
            Viewport::Large
        } else if width >= BREAKPOINT_MEDIUM {
            Viewport::Medium
        } else if width >= BREAKPOINT_SMALL {
            Viewport::Small
        } else {
            Viewport::Compact
        }
    }

    /// Whether the sidebar is laid out next to the content.
    pub(crate) fn sidebar_in_flow(self) -> bool {
        self >= Viewport::Large
    }
}

/// Where the lesson sidebar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarPlacement {
    /// Part of the row layout, next to the content.
    InFlow,
    /// Drawn over the page from the left edge.
    Overlay,
    /// Off-screen.
    Hidden,
}

impl SidebarPlacement {
    /// Resolve the placement; the open flag only matters off-flow.
    pub(crate) fn resolve(viewport: Viewport, sidebar_open: bool) -> Self {
        if viewport.sidebar_in_flow() {
            SidebarPlacement::InFlow
        } else if sidebar_open {
            SidebarPlacement::Overlay
        } else {
            SidebarPlacement::Hidden
        }
    }

    pub(crate) fn is_visible(self) -> bool {
        !matches!(self, SidebarPlacement::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_breakpoint_edges_when_classified_then_lower_bound_is_inclusive() {
        assert_eq!(Viewport::from_width(0.0), Viewport::Compact);
        assert_eq!(Viewport::from_width(639.9), Viewport::Compact);
        assert_eq!(Viewport::from_width(640.0), Viewport::Small);
        assert_eq!(Viewport::from_width(768.0), Viewport::Medium);
        assert_eq!(Viewport::from_width(1023.0), Viewport::Medium);
        assert_eq!(Viewport::from_width(1024.0), Viewport::Large);
        assert_eq!(Viewport::from_width(2560.0), Viewport::Large);
    }

    #[test]
    fn given_large_viewport_when_resolving_placement_then_open_flag_is_ignored()
    {
        assert_eq!(
            SidebarPlacement::resolve(Viewport::Large, false),
            SidebarPlacement::InFlow
        );
        assert_eq!(
            SidebarPlacement::resolve(Viewport::Large, true),
            SidebarPlacement::InFlow
        );
    }

    #[test]
    fn given_narrow_viewport_when_resolving_placement_then_open_flag_decides() {
        for viewport in [Viewport::Compact, Viewport::Small, Viewport::Medium] {
            assert_eq!(
                SidebarPlacement::resolve(viewport, true),
                SidebarPlacement::Overlay
            );
            assert_eq!(
                SidebarPlacement::resolve(viewport, false),
                SidebarPlacement::Hidden
            );
        }
    }
}
