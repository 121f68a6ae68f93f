use crate::dtos::ScheduleWindowDTO;
use agendo_domain::{ScheduleWindow, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindowResponse {
    pub schedule: ScheduleWindowDTO,
}

impl ScheduleWindowResponse {
    pub fn new(window: ScheduleWindow) -> Self {
        Self {
            schedule: ScheduleWindowDTO::new(window),
        }
    }
}

pub mod create_schedule {
    use super::*;
    use chrono::NaiveTime;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub day_of_week: u32,
        pub start_time: NaiveTime,
        pub end_time: NaiveTime,
    }

    pub type APIResponse = ScheduleWindowResponse;
}

pub mod get_schedules {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub schedules: Vec<ScheduleWindowDTO>,
    }

    impl APIResponse {
        pub fn new(windows: Vec<ScheduleWindow>) -> Self {
            Self {
                schedules: windows.into_iter().map(ScheduleWindowDTO::new).collect(),
            }
        }
    }
}

pub mod update_schedule {
    use super::*;
    use chrono::NaiveTime;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub schedule_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub day_of_week: u32,
        pub start_time: NaiveTime,
        pub end_time: NaiveTime,
    }

    pub type APIResponse = ScheduleWindowResponse;
}

pub mod delete_schedule {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub schedule_id: ID,
    }

    pub type APIResponse = ScheduleWindowResponse;
}
