//! PostgreSQL implementation of ClassroomRepository.
//!
//! Classrooms live in `classrooms`; enrollments in `enrollments`. Weekdays are
//! stored as an `INT[]` of Sunday-first indices.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::classroom::{Classroom, MeetingPattern};
use crate::domain::foundation::{ClassroomId, DomainError, Timestamp, UserId};
use crate::domain::schedule::WeekdaySet;
use crate::ports::ClassroomRepository;

/// Shared projection: one row per classroom with its enrollments aggregated.
const SELECT_CLASSROOMS: &str = r#"
    SELECT c.id, c.teacher_id, c.title, c.start_date, c.end_date,
           c.start_time, c.end_time, c.days, c.live_room, c.created_at,
           COALESCE(
               array_agg(e.user_id ORDER BY e.enrolled_at) FILTER (WHERE e.user_id IS NOT NULL),
               '{}'
           ) AS enrolled
    FROM classrooms c
    LEFT JOIN enrollments e ON e.classroom_id = c.id
"#;

const GROUP_AND_ORDER: &str = r#"
    GROUP BY c.id
    ORDER BY c.created_at DESC, c.id
"#;

/// PostgreSQL implementation of ClassroomRepository.
#[derive(Clone)]
pub struct PostgresClassroomRepository {
    pool: PgPool,
}

impl PostgresClassroomRepository {
    /// Creates a new PostgresClassroomRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_list(
        &self,
        filter: &str,
        bind: Option<&uuid::Uuid>,
        context: &str,
    ) -> Result<Vec<Classroom>, DomainError> {
        let sql = format!("{} {} {}", SELECT_CLASSROOMS, filter, GROUP_AND_ORDER);
        let mut query = sqlx::query(&sql);
        if let Some(id) = bind {
            query = query.bind(id);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(context, e))?;

        let classrooms = rows
            .into_iter()
            .filter_map(|row| match row_to_classroom(row) {
                Ok(classroom) => Some(classroom),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable classroom row");
                    None
                }
            })
            .collect();
        Ok(classrooms)
    }
}

#[async_trait]
impl ClassroomRepository for PostgresClassroomRepository {
    async fn save(&self, classroom: &Classroom) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        let pattern = classroom.pattern();
        sqlx::query(
            r#"
            INSERT INTO classrooms (
                id, teacher_id, title, start_date, end_date,
                start_time, end_time, days, live_room, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(classroom.id().as_uuid())
        .bind(classroom.teacher_id().as_uuid())
        .bind(classroom.title())
        .bind(pattern.active_from)
        .bind(pattern.active_until)
        .bind(pattern.daily_start)
        .bind(pattern.daily_end)
        .bind(pattern.weekdays.map(|days| days.indices()))
        .bind(classroom.live_room())
        .bind(classroom.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert classroom", e))?;

        for user_id in classroom.enrolled() {
            sqlx::query(
                r#"
                INSERT INTO enrollments (classroom_id, user_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(classroom.id().as_uuid())
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert enrollment", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ClassroomId) -> Result<Option<Classroom>, DomainError> {
        let sql = format!("{} WHERE c.id = $1 {}", SELECT_CLASSROOMS, GROUP_AND_ORDER);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch classroom", e))?;

        row.map(row_to_classroom).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Classroom>, DomainError> {
        self.fetch_list("", None, "Failed to list classrooms").await
    }

    async fn list_by_teacher(&self, teacher_id: &UserId) -> Result<Vec<Classroom>, DomainError> {
        self.fetch_list(
            "WHERE c.teacher_id = $1",
            Some(teacher_id.as_uuid()),
            "Failed to list classrooms by teacher",
        )
        .await
    }

    async fn list_by_enrolled_user(&self, user_id: &UserId) -> Result<Vec<Classroom>, DomainError> {
        self.fetch_list(
            "WHERE c.id IN (SELECT classroom_id FROM enrollments WHERE user_id = $1)",
            Some(user_id.as_uuid()),
            "Failed to list classrooms by enrollment",
        )
        .await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

/// Stored weekday indices outside 0..=6 drop the recurrence instead of the
/// row, so the classroom is still listed but never expanded.
fn decode_weekdays(classroom_id: uuid::Uuid, days: Option<Vec<i32>>) -> Option<WeekdaySet> {
    match WeekdaySet::from_indices(days?) {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::warn!(%classroom_id, error = %e, "Ignoring invalid stored weekdays");
            None
        }
    }
}

fn row_to_classroom(row: sqlx::postgres::PgRow) -> Result<Classroom, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let teacher_id: uuid::Uuid = column(&row, "teacher_id")?;
    let title: String = column(&row, "title")?;
    let start_date: Option<NaiveDate> = column(&row, "start_date")?;
    let end_date: Option<NaiveDate> = column(&row, "end_date")?;
    let start_time: Option<NaiveTime> = column(&row, "start_time")?;
    let end_time: Option<NaiveTime> = column(&row, "end_time")?;
    let days: Option<Vec<i32>> = column(&row, "days")?;
    let live_room: String = column(&row, "live_room")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let enrolled: Vec<uuid::Uuid> = column(&row, "enrolled")?;

    let weekdays = decode_weekdays(id, days);

    let pattern = MeetingPattern {
        active_from: start_date,
        active_until: end_date,
        daily_start: start_time,
        daily_end: end_time,
        weekdays,
    };

    Ok(Classroom::reconstitute(
        ClassroomId::from_uuid(id),
        UserId::from_uuid(teacher_id),
        title,
        pattern,
        live_room,
        enrolled.into_iter().map(UserId::from_uuid).collect(),
        Timestamp::from_datetime(created_at),
    ))
}
