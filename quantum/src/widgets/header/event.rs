/// Intent events handled by header views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderIntent {
    ToggleSidebar,
}

/// Effect events produced by the header reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderEffect {
    ToggleSidebar,
}

/// Header event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEvent {
    /// Intent event reduced by the header widget.
    Intent(HeaderIntent),
    /// External effect orchestrated by app-level routing.
    Effect(HeaderEffect),
}
