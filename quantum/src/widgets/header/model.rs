/// Brand label shown in the header and window title.
pub(crate) const BRAND_NAME: &str = "Quantum";

/// View model for the header widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderViewModel {
    pub(crate) brand: &'static str,
    pub(crate) brand_size: f32,
    /// Wishlist and notification buttons are dropped on compact windows.
    pub(crate) show_secondary_actions: bool,
}
