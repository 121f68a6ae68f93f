use super::{IBookingRepo, InsertBookingError};
use agendo_domain::{Booking, BookingStatus, ID};
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, FromRow)]
struct BookingRaw {
    booking_uid: Uuid,
    client_uid: Uuid,
    service_uid: Uuid,
    booked_at: NaiveDateTime,
    status: String,
}

impl From<BookingRaw> for Booking {
    fn from(raw: BookingRaw) -> Self {
        Self {
            id: raw.booking_uid.into(),
            client_id: raw.client_uid.into(),
            service_id: raw.service_uid.into(),
            booked_at: raw.booked_at,
            // The status column carries a CHECK constraint, so this parse
            // only fails on a manually corrupted row.
            status: raw.status.parse().unwrap_or(BookingStatus::Pending),
        }
    }
}

fn to_uuid_vec(ids: &[ID]) -> Vec<Uuid> {
    ids.iter().map(|id| *id.inner_ref()).collect()
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert(&self, booking: &Booking) -> Result<(), InsertBookingError> {
        // The partial unique index on (service_uid, booked_at) where
        // status <> 'cancelled' makes the second of two racing inserts
        // fail with a unique violation.
        sqlx::query(
            r#"
            INSERT INTO bookings(booking_uid, client_uid, service_uid, booked_at, status)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*booking.id.inner_ref())
        .bind(*booking.client_id.inner_ref())
        .bind(*booking.service_id.inner_ref())
        .bind(booking.booked_at)
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                InsertBookingError::SlotTaken
            }
            _ => InsertBookingError::Storage(e.into()),
        })?;

        Ok(())
    }

    async fn save(&self, booking: &Booking) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2
            WHERE booking_uid = $1
            "#,
        )
        .bind(*booking.id.inner_ref())
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        let booking: BookingRaw = match sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE booking_uid = $1
            "#,
        )
        .bind(*booking_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(booking) => booking,
            Err(_) => return None,
        };
        Some(booking.into())
    }

    async fn find_by_client(&self, client_id: &ID) -> Vec<Booking> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE client_uid = $1
            ORDER BY booked_at
            "#,
        )
        .bind(*client_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        bookings.into_iter().map(|b| b.into()).collect()
    }

    async fn find_by_services(&self, service_ids: &[ID]) -> Vec<Booking> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE service_uid = ANY($1)
            ORDER BY booked_at
            "#,
        )
        .bind(to_uuid_vec(service_ids))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        bookings.into_iter().map(|b| b.into()).collect()
    }

    async fn find_active_by_services_on_date(
        &self,
        service_ids: &[ID],
        date: NaiveDate,
    ) -> Vec<Booking> {
        let bookings: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE service_uid = ANY($1)
                AND booked_at::date = $2
                AND status <> 'cancelled'
            ORDER BY booked_at
            "#,
        )
        .bind(to_uuid_vec(service_ids))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        bookings.into_iter().map(|b| b.into()).collect()
    }
}
