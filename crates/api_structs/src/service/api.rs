use crate::dtos::ServiceOfferingDTO;
use agendo_domain::{ServiceOffering, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingResponse {
    pub service: ServiceOfferingDTO,
}

impl ServiceOfferingResponse {
    pub fn new(service: ServiceOffering) -> Self {
        Self {
            service: ServiceOfferingDTO::new(service),
        }
    }
}

pub mod create_service {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub description: Option<String>,
        pub price_cents: i64,
        pub duration_minutes: i64,
    }

    pub type APIResponse = ServiceOfferingResponse;
}

pub mod get_services {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub services: Vec<ServiceOfferingDTO>,
    }

    impl APIResponse {
        pub fn new(services: Vec<ServiceOffering>) -> Self {
            Self {
                services: services.into_iter().map(ServiceOfferingDTO::new).collect(),
            }
        }
    }
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub description: Option<String>,
        pub price_cents: i64,
        pub duration_minutes: i64,
    }

    pub type APIResponse = ServiceOfferingResponse;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceOfferingResponse;
}
