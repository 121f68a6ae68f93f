use agendo_domain::{User, ID};
use serde::{Deserialize, Serialize};

/// Public view of a provider account, safe to expose on anonymous routes.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDTO {
    pub id: ID,
    pub name: String,
    pub slug: Option<String>,
}

impl ProviderDTO {
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            slug: user.slug.clone(),
        }
    }
}