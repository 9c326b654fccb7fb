use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Timestamp layout used for `generated_at`: local time, microsecond
/// precision, no UTC offset.
const GENERATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One non-deleted course joined with its category and the distinct
/// enrollment/lesson counts aggregated per course.
///
/// `price` serializes as a string in the JSON output. A course without a
/// category carries `None`, and a course with no enrollments or lessons
/// carries a zero count rather than null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub price: Decimal,
    pub duration_hours: i32,
    pub is_published: bool,
    pub category_name: Option<String>,
    pub total_students: i64,
    pub total_lessons: i64,
}

/// The report artifact of a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// When this document was generated, ISO-8601 local time.
    pub generated_at: String,
    /// Always equals `courses.len()`.
    pub total_courses: usize,
    /// Course records in display order.
    pub courses: Vec<CourseRecord>,
}

impl ReportDocument {
    /// Wraps aggregated course records into a report generated at `now`.
    ///
    /// Records are ordered by descending student count, ties broken by
    /// ascending title, regardless of the order the caller produced them in.
    pub fn build(mut courses: Vec<CourseRecord>, now: DateTime<Local>) -> Self {
        courses.sort_by(|a, b| {
            b.total_students
                .cmp(&a.total_students)
                .then_with(|| a.title.cmp(&b.title))
        });

        Self {
            generated_at: now.format(GENERATED_AT_FORMAT).to_string(),
            total_courses: courses.len(),
            courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn course(id: u64, title: &str, students: i64) -> CourseRecord {
        CourseRecord {
            id,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            price: Decimal::new(4990, 2),
            duration_hours: 8,
            is_published: true,
            category_name: Some("Programming".to_string()),
            total_students: students,
            total_lessons: 10,
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 5, 14, 30, 0).unwrap()
    }

    #[test]
    fn orders_by_students_desc_then_title_asc() {
        let unsorted = vec![
            course(1, "Rust Basics", 2),
            course(2, "Advanced SQL", 7),
            course(3, "Intro to Go", 2),
        ];

        let document = ReportDocument::build(unsorted, fixed_now());

        let titles: Vec<&str> = document.courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Advanced SQL", "Intro to Go", "Rust Basics"]);
    }

    #[test]
    fn total_courses_matches_record_count() {
        let document = ReportDocument::build(
            vec![course(1, "A", 1), course(2, "B", 0), course(3, "C", 5)],
            fixed_now(),
        );

        assert_eq!(document.total_courses, 3);
        assert_eq!(document.total_courses, document.courses.len());
    }

    #[test]
    fn zero_count_courses_are_retained() {
        let mut lonely = course(9, "Unloved Course", 0);
        lonely.total_lessons = 0;

        let document = ReportDocument::build(vec![lonely], fixed_now());

        assert_eq!(document.courses.len(), 1);
        assert_eq!(document.courses[0].total_students, 0);
        assert_eq!(document.courses[0].total_lessons, 0);
    }

    #[test]
    fn generated_at_is_iso_8601_local_time() {
        let document = ReportDocument::build(vec![], fixed_now());
        assert_eq!(document.generated_at, "2026-08-05T14:30:00.000000");
    }

    #[test]
    fn empty_input_builds_an_empty_report() {
        let document = ReportDocument::build(vec![], fixed_now());
        assert_eq!(document.total_courses, 0);
        assert!(document.courses.is_empty());
    }
}
