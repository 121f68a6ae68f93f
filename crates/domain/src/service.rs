use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A bookable service published by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: ID,
    pub provider_id: ID,
    pub title: String,
    pub description: Option<String>,
    /// Price in the smallest currency unit
    pub price_cents: i64,
    /// Informational only. Slot generation always uses the fixed
    /// 30 minute granularity, see `booking_slots`.
    pub duration_minutes: i64,
}

impl ServiceOffering {
    pub fn new(provider_id: ID, title: &str, price_cents: i64, duration_minutes: i64) -> Self {
        Self {
            id: Default::default(),
            provider_id,
            title: title.to_string(),
            description: None,
            price_cents,
            duration_minutes,
        }
    }
}

impl Entity for ServiceOffering {
    fn id(&self) -> &ID {
        &self.id
    }
}
