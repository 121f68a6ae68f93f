use serde::{Deserialize, Serialize};

pub mod get_provider {
    use super::*;
    use crate::dtos::{ProviderDTO, ScheduleWindowDTO, ServiceOfferingDTO};
    use agendo_domain::{ScheduleWindow, ServiceOffering, User};

    #[derive(Deserialize)]
    pub struct PathParams {
        pub provider: String,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub provider: ProviderDTO,
        pub services: Vec<ServiceOfferingDTO>,
        pub schedules: Vec<ScheduleWindowDTO>,
    }

    impl APIResponse {
        pub fn new(
            user: &User,
            services: Vec<ServiceOffering>,
            windows: Vec<ScheduleWindow>,
        ) -> Self {
            Self {
                provider: ProviderDTO::new(user),
                services: services.into_iter().map(ServiceOfferingDTO::new).collect(),
                schedules: windows.into_iter().map(ScheduleWindowDTO::new).collect(),
            }
        }
    }
}

pub mod get_available_slots {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub provider: String,
    }

    #[derive(Deserialize, Serialize)]
    pub struct QueryParams {
        pub date: NaiveDate,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub date: NaiveDate,
        pub available_slots: Vec<String>,
    }

    impl APIResponse {
        pub fn new(date: NaiveDate, available_slots: Vec<String>) -> Self {
            Self {
                date,
                available_slots,
            }
        }
    }
}
