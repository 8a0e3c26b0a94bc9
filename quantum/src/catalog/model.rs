use std::collections::HashSet;

use serde::Deserialize;

use super::errors::CatalogError;

/// Largest accepted gap between the declared and computed discount.
const DISCOUNT_TOLERANCE: u8 = 1;

/// Lesson identifier, unique across the whole course.
pub(crate) type LessonId = u32;

/// A single unit of course content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Lesson {
    pub(crate) id: LessonId,
    pub(crate) title: String,
    pub(crate) duration: String,
    /// Lesson can be watched without purchase.
    #[serde(default)]
    pub(crate) is_preview: bool,
}

/// A named, ordered group of lessons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) lessons: Vec<Lesson>,
}

impl Section {
    /// Return the number of lessons in this section.
    pub(crate) fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

/// Author of the course.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Publisher {
    pub(crate) name: String,
    pub(crate) role: String,
    /// Image reference; every image renders the bundled placeholder.
    #[allow(dead_code)]
    pub(crate) image: String,
    pub(crate) bio: String,
    pub(crate) rating: f32,
    pub(crate) reviews: u32,
    pub(crate) students: u32,
    pub(crate) courses: u32,
}

/// A related course advertised next to the description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct SuggestedCourse {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) rating: f32,
    /// Image reference; every image renders the bundled placeholder.
    #[allow(dead_code)]
    pub(crate) image: String,
}

/// Kind of material listed under "Course includes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum IncludeKind {
    Video,
    Article,
    Resource,
    Mobile,
}

/// One line of the "Course includes" list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct CourseInclude {
    pub(crate) kind: IncludeKind,
    pub(crate) label: String,
}

/// The course rendered by the application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Course {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) overview: String,
    pub(crate) full_price: f64,
    pub(crate) discounted_price: f64,
    pub(crate) discount_percent: u8,
    pub(crate) rating: f32,
    pub(crate) students: u32,
    pub(crate) lessons: u32,
    pub(crate) duration: String,
    pub(crate) level: String,
    #[serde(default)]
    pub(crate) likes: u32,
    #[serde(default)]
    pub(crate) includes: Vec<CourseInclude>,
    pub(crate) publisher: Publisher,
    pub(crate) sections: Vec<Section>,
    #[serde(default)]
    pub(crate) suggested_courses: Vec<SuggestedCourse>,
}

impl Course {
    /// Return the number of sections.
    pub(crate) fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Return the section at `index`, if any.
    pub(crate) fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Iterate lesson ids across all sections in authored order.
    pub(crate) fn lesson_ids(&self) -> impl Iterator<Item = LessonId> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.lessons.iter().map(|lesson| lesson.id))
    }

    /// Discount percent derived from the full and discounted prices.
    pub(crate) fn computed_discount(&self) -> u8 {
        if self.full_price <= 0.0 {
            return 0;
        }

        let ratio = 1.0 - self.discounted_price / self.full_price;
        (100.0 * ratio).round().clamp(0.0, 100.0) as u8
    }

    /// Check the catalog invariants.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for id in self.lesson_ids() {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateLessonId { id });
            }
        }

        let prices_valid = self.full_price.is_finite()
            && self.discounted_price.is_finite()
            && self.discounted_price >= 0.0
            && self.discounted_price <= self.full_price;
        if !prices_valid {
            return Err(CatalogError::InvalidPricing {
                full: self.full_price,
                discounted: self.discounted_price,
            });
        }

        let computed = self.computed_discount();
        if computed.abs_diff(self.discount_percent) > DISCOUNT_TOLERANCE {
            return Err(CatalogError::DiscountMismatch {
                declared: self.discount_percent,
                computed,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_embedded;

    fn fixture() -> Course {
        load_embedded().expect("embedded catalog should load")
    }

    #[test]
    fn given_fixture_when_enumerating_lesson_ids_then_ids_are_pairwise_distinct()
     {
        let course = fixture();
        let ids: Vec<LessonId> = course.lesson_ids().collect();
        let unique: HashSet<LessonId> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 8);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn given_fixture_when_comparing_prices_then_discount_matches_authored_percent()
     {
        let course = fixture();

        assert!(course.discounted_price < course.full_price);
        assert_eq!(course.discount_percent, 60);
        assert_eq!(course.computed_discount(), course.discount_percent);
    }

    #[test]
    fn given_fixture_when_reading_sections_then_authored_order_is_kept() {
        let course = fixture();
        let sizes: Vec<usize> =
            course.sections.iter().map(Section::lesson_count).collect();

        assert_eq!(sizes, vec![4, 2, 2]);
        assert_eq!(
            course.section(0).map(|section| section.title.as_str()),
            Some("Course Introduction")
        );
        assert!(course.section(3).is_none());
        assert_eq!(
            course.lesson_ids().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn given_duplicate_lesson_id_when_validating_then_error_names_the_id() {
        let mut course = fixture();
        course.sections[2].lessons[0].id = 3;

        let err = course.validate().expect_err("duplicate id must fail");
        assert!(matches!(err, CatalogError::DuplicateLessonId { id: 3 }));
    }

    #[test]
    fn given_discounted_price_above_full_when_validating_then_pricing_is_rejected()
     {
        let mut course = fixture();
        course.discounted_price = 49.99;

        let err = course.validate().expect_err("raised price must fail");
        assert!(matches!(err, CatalogError::InvalidPricing { .. }));
    }

    #[test]
    fn given_mismatched_discount_when_validating_then_mismatch_is_reported() {
        let mut course = fixture();
        course.discount_percent = 75;

        let err = course.validate().expect_err("wrong percent must fail");
        assert!(matches!(
            err,
            CatalogError::DiscountMismatch {
                declared: 75,
                computed: 60
            }
        ));
    }

    #[test]
    fn given_fixture_when_loaded_then_image_references_are_kept() {
        let course = fixture();

        assert_eq!(course.publisher.image, "/placeholder.svg");
        assert!(
            course
                .suggested_courses
                .iter()
                .all(|suggested| suggested.image == "/placeholder.svg")
        );
    }

    #[test]
    fn given_zero_full_price_when_computing_discount_then_discount_is_zero() {
        let mut course = fixture();
        course.full_price = 0.0;
        course.discounted_price = 0.0;

        assert_eq!(course.computed_discount(), 0);
    }
}
