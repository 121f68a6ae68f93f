mod booking;
mod schedule;
mod service;
mod shared;
mod user;

use booking::{InMemoryBookingRepo, PostgresBookingRepo};
pub use booking::{IBookingRepo, InsertBookingError};
use schedule::{InMemoryScheduleRepo, PostgresScheduleRepo};
pub use schedule::{IScheduleRepo, InsertScheduleError};
use service::{InMemoryServiceRepo, PostgresServiceRepo};
pub use service::{DeleteServiceError, IServiceRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, PostgresUserRepo};
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub schedules: Arc<dyn IScheduleRepo>,
    pub services: Arc<dyn IServiceRepo>,
    pub bookings: Arc<dyn IBookingRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            schedules: Arc::new(PostgresScheduleRepo::new(pool.clone())),
            services: Arc::new(PostgresServiceRepo::new(pool.clone())),
            bookings: Arc::new(PostgresBookingRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            schedules: Arc::new(InMemoryScheduleRepo::new()),
            services: Arc::new(InMemoryServiceRepo::new()),
            bookings: Arc::new(InMemoryBookingRepo::new()),
        }
    }
}
