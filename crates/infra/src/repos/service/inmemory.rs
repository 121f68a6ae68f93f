use super::{DeleteServiceError, IServiceRepo};
use crate::repos::shared::inmemory_repo::*;
use agendo_domain::{ServiceOffering, ID};

pub struct InMemoryServiceRepo {
    services: std::sync::Mutex<Vec<ServiceOffering>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            services: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for InMemoryServiceRepo {
    async fn insert(&self, service: &ServiceOffering) -> anyhow::Result<()> {
        insert(service, &self.services);
        Ok(())
    }

    async fn save(&self, service: &ServiceOffering) -> anyhow::Result<()> {
        save(service, &self.services);
        Ok(())
    }

    async fn find(&self, service_id: &ID) -> Option<ServiceOffering> {
        find(service_id, &self.services)
    }

    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ServiceOffering> {
        find_by(&self.services, |s| s.provider_id == *provider_id)
    }

    async fn delete(&self, service_id: &ID) -> Result<Option<ServiceOffering>, DeleteServiceError> {
        Ok(delete(service_id, &self.services))
    }
}
