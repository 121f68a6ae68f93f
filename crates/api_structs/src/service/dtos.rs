use agendo_domain::{ServiceOffering, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingDTO {
    pub id: ID,
    pub provider_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i64,
}

impl ServiceOfferingDTO {
    pub fn new(service: ServiceOffering) -> Self {
        Self {
            id: service.id,
            provider_id: service.provider_id,
            title: service.title,
            description: service.description,
            price_cents: service.price_cents,
            duration_minutes: service.duration_minutes,
        }
    }
}
