mod inmemory;
mod postgres;

use agendo_domain::{ScheduleWindow, ID};
pub use inmemory::InMemoryScheduleRepo;
pub use postgres::PostgresScheduleRepo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsertScheduleError {
    /// A provider has at most one window per weekday. Raised by the
    /// storage layer itself so that two racing creates can never both
    /// succeed.
    #[error("The provider already has a schedule window on that day")]
    DayTaken,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait IScheduleRepo: Send + Sync {
    /// Inserts a window, atomically enforcing at most one window per
    /// (provider, weekday).
    async fn insert(&self, window: &ScheduleWindow) -> Result<(), InsertScheduleError>;
    async fn save(&self, window: &ScheduleWindow) -> anyhow::Result<()>;
    async fn find(&self, window_id: &ID) -> Option<ScheduleWindow>;
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ScheduleWindow>;
    async fn find_by_provider_and_day(
        &self,
        provider_id: &ID,
        day_of_week: u32,
    ) -> Option<ScheduleWindow>;
    async fn delete(&self, window_id: &ID) -> Option<ScheduleWindow>;
}
