use super::{IScheduleRepo, InsertScheduleError};
use agendo_domain::{ScheduleWindow, ID};
use chrono::NaiveTime;
use sqlx::{types::Uuid, FromRow, PgPool};

/// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ScheduleWindowRaw {
    schedule_uid: Uuid,
    provider_uid: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl From<ScheduleWindowRaw> for ScheduleWindow {
    fn from(raw: ScheduleWindowRaw) -> Self {
        Self {
            id: raw.schedule_uid.into(),
            provider_id: raw.provider_uid.into(),
            day_of_week: raw.day_of_week as u32,
            start_time: raw.start_time,
            end_time: raw.end_time,
        }
    }
}

#[async_trait::async_trait]
impl IScheduleRepo for PostgresScheduleRepo {
    async fn insert(&self, window: &ScheduleWindow) -> Result<(), InsertScheduleError> {
        // The unique constraint on (provider_uid, day_of_week) makes the
        // second of two racing inserts fail with a unique violation.
        sqlx::query(
            r#"
            INSERT INTO schedules(schedule_uid, provider_uid, day_of_week, start_time, end_time)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*window.id.inner_ref())
        .bind(*window.provider_id.inner_ref())
        .bind(window.day_of_week as i16)
        .bind(window.start_time)
        .bind(window.end_time)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                InsertScheduleError::DayTaken
            }
            _ => InsertScheduleError::Storage(e.into()),
        })?;

        Ok(())
    }

    async fn save(&self, window: &ScheduleWindow) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE schedules
            SET day_of_week = $2,
            start_time = $3,
            end_time = $4
            WHERE schedule_uid = $1
            "#,
        )
        .bind(*window.id.inner_ref())
        .bind(window.day_of_week as i16)
        .bind(window.start_time)
        .bind(window.end_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, window_id: &ID) -> Option<ScheduleWindow> {
        let window: ScheduleWindowRaw = match sqlx::query_as(
            r#"
            SELECT * FROM schedules
            WHERE schedule_uid = $1
            "#,
        )
        .bind(*window_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(window) => window,
            Err(_) => return None,
        };
        Some(window.into())
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ScheduleWindow> {
        let windows: Vec<ScheduleWindowRaw> = sqlx::query_as(
            r#"
            SELECT * FROM schedules
            WHERE provider_uid = $1
            ORDER BY day_of_week
            "#,
        )
        .bind(*provider_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        windows.into_iter().map(|w| w.into()).collect()
    }

    async fn find_by_provider_and_day(
        &self,
        provider_id: &ID,
        day_of_week: u32,
    ) -> Option<ScheduleWindow> {
        let window: ScheduleWindowRaw = match sqlx::query_as(
            r#"
            SELECT * FROM schedules
            WHERE provider_uid = $1 AND day_of_week = $2
            "#,
        )
        .bind(*provider_id.inner_ref())
        .bind(day_of_week as i16)
        .fetch_one(&self.pool)
        .await
        {
            Ok(window) => window,
            Err(_) => return None,
        };
        Some(window.into())
    }

    async fn delete(&self, window_id: &ID) -> Option<ScheduleWindow> {
        let window: ScheduleWindowRaw = match sqlx::query_as(
            r#"
            DELETE FROM schedules
            WHERE schedule_uid = $1
            RETURNING *
            "#,
        )
        .bind(*window_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(window) => window,
            Err(_) => return None,
        };
        Some(window.into())
    }
}
