use thiserror::Error;

use super::model::LessonId;

/// Errors emitted while decoding or validating the course catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    /// JSON deserialization failed.
    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Two lessons share the same identifier.
    #[error("lesson id {id} is used more than once")]
    DuplicateLessonId { id: LessonId },
    /// Prices are negative, non-finite, or the discount raises the price.
    #[error("invalid pricing: full {full}, discounted {discounted}")]
    InvalidPricing { full: f64, discounted: f64 },
    /// The declared discount does not match the two prices.
    #[error("discount {declared}% does not match computed {computed}%")]
    DiscountMismatch { declared: u8, computed: u8 },
}
