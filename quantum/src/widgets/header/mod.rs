mod event;
mod model;
mod reducer;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{HeaderEffect, HeaderEvent, HeaderIntent};
pub(crate) use self::model::{BRAND_NAME, HeaderViewModel};
use crate::layout::Viewport;

const BRAND_SIZE_COMPACT: f32 = 20.0;
const BRAND_SIZE_WIDE: f32 = 24.0;

/// Header widget with the menu toggle and shop shortcuts.
pub(crate) struct HeaderWidget;

impl HeaderWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce a header intent event into effects.
    pub(crate) fn reduce(&self, event: HeaderIntent) -> Task<HeaderEffect> {
        reducer::reduce(event)
    }

    /// Produce the header view model for rendering.
    pub(crate) fn vm(&self, viewport: Viewport) -> HeaderViewModel {
        let brand_size = if viewport >= Viewport::Medium {
            BRAND_SIZE_WIDE
        } else {
            BRAND_SIZE_COMPACT
        };

        HeaderViewModel {
            brand: BRAND_NAME,
            brand_size,
            show_secondary_actions: viewport >= Viewport::Small,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_compact_viewport_when_building_vm_then_secondary_actions_hide() {
        let vm = HeaderWidget::new().vm(Viewport::Compact);

        assert!(!vm.show_secondary_actions);
        assert_eq!(vm.brand_size, BRAND_SIZE_COMPACT);
    }

    #[test]
    fn given_medium_viewport_when_building_vm_then_brand_grows() {
        let vm = HeaderWidget::new().vm(Viewport::Medium);

        assert!(vm.show_secondary_actions);
        assert_eq!(vm.brand_size, BRAND_SIZE_WIDE);
        assert_eq!(vm.brand, "Quantum");
    }
}
