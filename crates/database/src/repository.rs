use crate::error::DbError;
use report::CourseRecord;
use rust_decimal::Decimal;
use sqlx::FromRow;
use sqlx::mysql::MySqlConnection;

/// One row of the enrollment aggregation, as decoded from MySQL.
#[derive(FromRow, Debug, Clone)]
pub struct CourseRow {
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

impl From<CourseRow> for CourseRecord {
    fn from(row: CourseRow) -> Self {
        CourseRecord {
            id: row.id,
            title: row.title,
            slug: row.slug,
            price: row.price,
            duration_hours: row.duration_hours,
            is_published: row.is_published,
            category_name: row.category_name,
            total_students: row.total_students,
            total_lessons: row.total_lessons,
        }
    }
}

/// The `CourseRepository` provides a high-level interface to the courses
/// schema. It encapsulates the report's SQL and data access logic.
pub struct CourseRepository<'c> {
    conn: &'c mut MySqlConnection,
}

impl<'c> CourseRepository<'c> {
    /// Creates a repository borrowing the run's single connection.
    pub fn new(conn: &'c mut MySqlConnection) -> Self {
        Self { conn }
    }

    /// Fetches per-course enrollment statistics.
    ///
    /// One row per non-deleted course, left-joined so that courses without
    /// a category, enrollments, or lessons still appear (with null category
    /// and zero counts). Ordered by student count descending, then title.
    pub async fn fetch_enrollment_stats(mut self) -> Result<Vec<CourseRecord>, DbError> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT
                c.id,
                c.title,
                c.slug,
                c.price,
                c.duration_hours,
                c.is_published,
                cat.name AS category_name,
                COUNT(DISTINCT e.id) AS total_students,
                COUNT(DISTINCT l.id) AS total_lessons
            FROM courses c
            LEFT JOIN categories cat ON c.category_id = cat.id
            LEFT JOIN enrollments e ON c.id = e.course_id
            LEFT JOIN lessons l ON c.id = l.course_id
            WHERE c.deleted_at IS NULL
            GROUP BY c.id, c.title, c.slug, c.price, c.duration_hours, c.is_published, cat.name
            ORDER BY total_students DESC, c.title
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await
        .map_err(DbError::Query)?;

        tracing::debug!(rows = rows.len(), "enrollment aggregation returned");

        Ok(rows.into_iter().map(CourseRecord::from).collect())
    }
}
