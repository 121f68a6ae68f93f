use super::{DeleteServiceError, IServiceRepo};
use agendo_domain::{ServiceOffering, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct PostgresServiceRepo {
    pool: PgPool,
}

impl PostgresServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceOfferingRaw {
    service_uid: Uuid,
    provider_uid: Uuid,
    title: String,
    description: Option<String>,
    price_cents: i64,
    duration_minutes: i64,
}

impl From<ServiceOfferingRaw> for ServiceOffering {
    fn from(raw: ServiceOfferingRaw) -> Self {
        Self {
            id: raw.service_uid.into(),
            provider_id: raw.provider_uid.into(),
            title: raw.title,
            description: raw.description,
            price_cents: raw.price_cents,
            duration_minutes: raw.duration_minutes,
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for PostgresServiceRepo {
    async fn insert(&self, service: &ServiceOffering) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO services(service_uid, provider_uid, title, description, price_cents, duration_minutes)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*service.id.inner_ref())
        .bind(*service.provider_id.inner_ref())
        .bind(&service.title)
        .bind(&service.description)
        .bind(service.price_cents)
        .bind(service.duration_minutes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, service: &ServiceOffering) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE services
            SET title = $2,
            description = $3,
            price_cents = $4,
            duration_minutes = $5
            WHERE service_uid = $1
            "#,
        )
        .bind(*service.id.inner_ref())
        .bind(&service.title)
        .bind(&service.description)
        .bind(service.price_cents)
        .bind(service.duration_minutes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, service_id: &ID) -> Option<ServiceOffering> {
        let service: ServiceOfferingRaw = match sqlx::query_as(
            r#"
            SELECT * FROM services
            WHERE service_uid = $1
            "#,
        )
        .bind(*service_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(service) => service,
            Err(_) => return None,
        };
        Some(service.into())
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ServiceOffering> {
        let services: Vec<ServiceOfferingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM services
            WHERE provider_uid = $1
            ORDER BY title
            "#,
        )
        .bind(*provider_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        services.into_iter().map(|s| s.into()).collect()
    }

    async fn delete(&self, service_id: &ID) -> Result<Option<ServiceOffering>, DeleteServiceError> {
        let res: Result<ServiceOfferingRaw, sqlx::Error> = sqlx::query_as(
            r#"
            DELETE FROM services
            WHERE service_uid = $1
            RETURNING *
            "#,
        )
        .bind(*service_id.inner_ref())
        .fetch_one(&self.pool)
        .await;

        match res {
            Ok(service) => Ok(Some(service.into())),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            // The bookings.service_uid foreign key rejects deleting a
            // service that still has booking rows
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(DeleteServiceError::HasBookings)
            }
            Err(e) => Err(DeleteServiceError::Storage(e.into())),
        }
    }
}
