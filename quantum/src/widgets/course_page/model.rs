use crate::catalog::Course;
use crate::layout::Viewport;

/// Width of the pricing card when it sits next to the hero.
pub(crate) const PRICING_CARD_WIDTH: f32 = 320.0;

/// Viewport dependent sizes for the course page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PageLayout {
    pub(crate) content_padding: f32,
    pub(crate) hero_height: f32,
    pub(crate) hero_play_size: f32,
    pub(crate) title_size: f32,
    pub(crate) subtitle_size: f32,
    pub(crate) heading_size: f32,
    pub(crate) detail_columns: usize,
    /// Pricing card moves below the hero instead of beside it.
    pub(crate) stack_pricing: bool,
    /// Overview and suggested courses share one row.
    pub(crate) split_columns: bool,
}

impl PageLayout {
    pub(crate) fn for_viewport(viewport: Viewport) -> Self {
        match viewport {
            Viewport::Compact => Self {
                content_padding: 16.0,
                hero_height: 192.0,
                hero_play_size: 32.0,
                title_size: 24.0,
                subtitle_size: 16.0,
                heading_size: 20.0,
                detail_columns: 2,
                stack_pricing: true,
                split_columns: false,
            },
            Viewport::Small => Self {
                content_padding: 24.0,
                hero_height: 256.0,
                hero_play_size: 48.0,
                title_size: 30.0,
                subtitle_size: 18.0,
                heading_size: 24.0,
                detail_columns: 3,
                stack_pricing: false,
                split_columns: false,
            },
            Viewport::Medium | Viewport::Large => Self {
                content_padding: 32.0,
                hero_height: 320.0,
                hero_play_size: 48.0,
                title_size: 36.0,
                subtitle_size: 20.0,
                heading_size: 24.0,
                detail_columns: 3,
                stack_pricing: false,
                split_columns: true,
            },
        }
    }
}

/// Read-only view model for the course page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CoursePageViewModel<'a> {
    pub(crate) course: &'a Course,
    pub(crate) layout: PageLayout,
}

/// Format a price in dollars with two decimals.
pub(crate) fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

pub(crate) fn discount_label(percent: u8) -> String {
    format!("{percent}% OFF")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fixture_prices_when_formatted_then_two_decimals_are_shown() {
        assert_eq!(format_price(15.99), "$15.99");
        assert_eq!(format_price(39.99), "$39.99");
        assert_eq!(format_price(40.0), "$40.00");
        assert_eq!(discount_label(60), "60% OFF");
    }

    #[test]
    fn given_compact_viewport_when_resolving_layout_then_pricing_stacks() {
        let layout = PageLayout::for_viewport(Viewport::Compact);

        assert!(layout.stack_pricing);
        assert!(!layout.split_columns);
        assert_eq!(layout.detail_columns, 2);
        assert_eq!(layout.hero_height, 192.0);
    }

    #[test]
    fn given_growing_viewport_when_resolving_layout_then_hero_never_shrinks() {
        let heights: Vec<f32> = [
            Viewport::Compact,
            Viewport::Small,
            Viewport::Medium,
            Viewport::Large,
        ]
        .into_iter()
        .map(|viewport| PageLayout::for_viewport(viewport).hero_height)
        .collect();

        assert!(heights.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(PageLayout::for_viewport(Viewport::Medium).split_columns);
    }
}
