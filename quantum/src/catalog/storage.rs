use super::errors::CatalogError;
use super::model::Course;

/// Course fixture compiled into the binary.
const EMBEDDED_COURSE: &str = include_str!("../../../assets/course.json");

/// Decode and validate the embedded course fixture.
pub(crate) fn load_embedded() -> Result<Course, CatalogError> {
    parse_course(EMBEDDED_COURSE)
}

/// Decode a course document and check its invariants.
pub(crate) fn parse_course(source: &str) -> Result<Course, CatalogError> {
    let course: Course = serde_json::from_str(source)?;
    course.validate()?;

    log::debug!(
        "catalog loaded: \"{}\" with {} sections and {} lessons",
        course.title,
        course.section_count(),
        course
            .sections
            .iter()
            .map(|section| section.lesson_count())
            .sum::<usize>()
    );

    Ok(course)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_course() -> serde_json::Value {
        serde_json::json!({
            "title": "Sculpting",
            "description": "Short",
            "overview": "Long",
            "full_price": 20.0,
            "discounted_price": 10.0,
            "discount_percent": 50,
            "rating": 4.5,
            "students": 10,
            "lessons": 2,
            "duration": "1h",
            "level": "Beginner",
            "publisher": {
                "name": "A",
                "role": "B",
                "image": "/placeholder.svg",
                "bio": "",
                "rating": 4.0,
                "reviews": 1,
                "students": 1,
                "courses": 1
            },
            "sections": [
                {
                    "title": "Start",
                    "lessons": [
                        { "id": 1, "title": "One", "duration": "1:00" },
                        { "id": 2, "title": "Two", "duration": "2:00" }
                    ]
                }
            ]
        })
    }

    #[test]
    fn given_embedded_fixture_when_loaded_then_course_is_valid() {
        let course = load_embedded().expect("embedded catalog should load");

        assert_eq!(course.title, "Blender 3D Fundamentals");
        assert_eq!(course.section_count(), 3);
        assert_eq!(course.suggested_courses.len(), 2);
        assert_eq!(course.includes.len(), 4);
        assert!(course.sections[0].lessons[0].is_preview);
    }

    #[test]
    fn given_document_without_optional_fields_when_parsed_then_defaults_apply()
    {
        let source = minimal_course().to_string();

        let course = parse_course(&source).expect("minimal course is valid");

        assert_eq!(course.likes, 0);
        assert!(course.includes.is_empty());
        assert!(course.suggested_courses.is_empty());
        assert!(!course.sections[0].lessons[1].is_preview);
    }

    #[test]
    fn given_malformed_json_when_parsed_then_json_error_is_returned() {
        let err = parse_course("{ \"title\": ").expect_err("must fail");

        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn given_document_with_duplicate_ids_when_parsed_then_validation_fails() {
        let mut value = minimal_course();
        value["sections"][0]["lessons"][1]["id"] = serde_json::json!(1);

        let err = parse_course(&value.to_string()).expect_err("must fail");

        assert!(matches!(err, CatalogError::DuplicateLessonId { id: 1 }));
    }
}
