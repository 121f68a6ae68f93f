use super::{IScheduleRepo, InsertScheduleError};
use crate::repos::shared::inmemory_repo::*;
use agendo_domain::{ScheduleWindow, ID};

pub struct InMemoryScheduleRepo {
    windows: std::sync::Mutex<Vec<ScheduleWindow>>,
}

impl InMemoryScheduleRepo {
    pub fn new() -> Self {
        Self {
            windows: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IScheduleRepo for InMemoryScheduleRepo {
    async fn insert(&self, window: &ScheduleWindow) -> Result<(), InsertScheduleError> {
        // The duplicate check and the push happen under the same lock
        // guard, mirroring the unique constraint of the Postgres repo.
        let mut windows = self.windows.lock().unwrap();
        let taken = windows
            .iter()
            .any(|w| w.provider_id == window.provider_id && w.day_of_week == window.day_of_week);
        if taken {
            return Err(InsertScheduleError::DayTaken);
        }
        windows.push(window.clone());
        Ok(())
    }

    async fn save(&self, window: &ScheduleWindow) -> anyhow::Result<()> {
        save(window, &self.windows);
        Ok(())
    }

    async fn find(&self, window_id: &ID) -> Option<ScheduleWindow> {
        find(window_id, &self.windows)
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ScheduleWindow> {
        find_by(&self.windows, |w| w.provider_id == *provider_id)
    }

    async fn find_by_provider_and_day(
        &self,
        provider_id: &ID,
        day_of_week: u32,
    ) -> Option<ScheduleWindow> {
        let windows = find_by(&self.windows, |w| {
            w.provider_id == *provider_id && w.day_of_week == day_of_week
        });
        windows.into_iter().next()
    }

    async fn delete(&self, window_id: &ID) -> Option<ScheduleWindow> {
        delete(window_id, &self.windows)
    }
}
