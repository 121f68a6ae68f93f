use agendo_domain::{ScheduleWindow, ID};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindowDTO {
    pub id: ID,
    pub day_of_week: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ScheduleWindowDTO {
    pub fn new(window: ScheduleWindow) -> Self {
        Self {
            id: window.id,
            day_of_week: window.day_of_week,
            start_time: window.start_time,
            end_time: window.end_time,
        }
    }
}
