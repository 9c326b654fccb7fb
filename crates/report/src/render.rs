use std::path::Path;

use comfy_table::{Table, presets};

use crate::document::ReportDocument;

const BANNER_WIDTH: usize = 80;
const TITLE_WIDTH: usize = 34;
const CATEGORY_WIDTH: usize = 19;

/// Prints the console summary: banner, generation header, the course
/// table, and the path the JSON report was saved to.
pub fn print_summary(document: &ReportDocument, report_path: &Path) {
    let rule = "=".repeat(BANNER_WIDTH);

    println!("\n{rule}");
    println!("{:=^BANNER_WIDTH$}", " COURSE ENROLLMENT REPORT ");
    println!("{rule}");
    println!("\nGenerated at: {}", document.generated_at);
    println!("Total courses: {}\n", document.total_courses);

    println!("{}", course_table(document));

    println!("\n✓ Report saved to: {}", report_path.display());
    println!("{rule}\n");
}

fn course_table(document: &ReportDocument) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_HORIZONTAL_ONLY)
        .set_header(vec!["ID", "Title", "Category", "Students", "Lessons"]);

    for course in &document.courses {
        let category = course.category_name.as_deref().unwrap_or("N/A");
        table.add_row(vec![
            course.id.to_string(),
            truncate(&course.title, TITLE_WIDTH),
            truncate(category, CATEGORY_WIDTH),
            course.total_students.to_string(),
            course.total_lessons.to_string(),
        ]);
    }

    table
}

/// Cuts `text` to at most `max` characters. Counts `char`s, so multibyte
/// titles never get split inside a code point.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CourseRecord;
    use chrono::Local;
    use rust_decimal::Decimal;

    fn record(title: &str, category: Option<&str>) -> CourseRecord {
        CourseRecord {
            id: 1,
            title: title.to_string(),
            slug: "slug".to_string(),
            price: Decimal::new(9990, 2),
            duration_hours: 10,
            is_published: true,
            category_name: category.map(str::to_string),
            total_students: 3,
            total_lessons: 5,
        }
    }

    #[test]
    fn titles_are_cut_to_thirty_four_chars() {
        let cut = truncate(&"x".repeat(60), TITLE_WIDTH);
        assert_eq!(cut.chars().count(), 34);
    }

    #[test]
    fn categories_are_cut_to_nineteen_chars() {
        let cut = truncate(&"y".repeat(40), CATEGORY_WIDTH);
        assert_eq!(cut.chars().count(), 19);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let cut = truncate(&"é".repeat(40), TITLE_WIDTH);
        assert_eq!(cut.chars().count(), 34);
        assert_eq!(cut, "é".repeat(34));
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Intro to Go", TITLE_WIDTH), "Intro to Go");
    }

    #[test]
    fn missing_category_renders_as_na() {
        let document =
            ReportDocument::build(vec![record("Intro to Go", None)], Local::now());

        let rendered = course_table(&document).to_string();

        assert!(rendered.contains("Intro to Go"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn table_header_lists_every_column() {
        let document = ReportDocument::build(vec![], Local::now());

        let rendered = course_table(&document).to_string();

        for column in ["ID", "Title", "Category", "Students", "Lessons"] {
            assert!(rendered.contains(column), "missing column {column}");
        }
    }

    #[test]
    fn long_titles_appear_truncated_in_the_table() {
        let long = "An Extremely Verbose Course Title That Never Ends".to_string();
        let document = ReportDocument::build(vec![record(&long, Some("Databases"))], Local::now());

        let rendered = course_table(&document).to_string();

        assert!(rendered.contains("An Extremely Verbose Course Title "));
        assert!(!rendered.contains(&long));
    }
}
