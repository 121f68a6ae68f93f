mod inmemory;
mod postgres;

use agendo_domain::{ServiceOffering, ID};
pub use inmemory::InMemoryServiceRepo;
pub use postgres::PostgresServiceRepo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeleteServiceError {
    /// Bookings are never hard-deleted, so a service that has ever been
    /// booked cannot be removed. The bookings foreign key enforces this
    /// in Postgres.
    #[error("The service still has bookings")]
    HasBookings,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    async fn insert(&self, service: &ServiceOffering) -> anyhow::Result<()>;
    async fn save(&self, service: &ServiceOffering) -> anyhow::Result<()>;
    async fn find(&self, service_id: &ID) -> Option<ServiceOffering>;
    async fn find_by_provider(&self, provider_id: &ID) -> Vec<ServiceOffering>;
    async fn delete(&self, service_id: &ID) -> Result<Option<ServiceOffering>, DeleteServiceError>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context_inmemory;
    use agendo_domain::{Role, ServiceOffering, User};

    #[tokio::test]
    async fn create_update_and_delete() {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        ctx.repos
            .users
            .insert(&provider)
            .await
            .expect("To insert user");

        let mut service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        assert!(ctx.repos.services.insert(&service).await.is_ok());

        service.title = "Haircut and beard".into();
        assert!(ctx.repos.services.save(&service).await.is_ok());
        assert_eq!(
            ctx.repos.services.find(&service.id).await.unwrap().title,
            "Haircut and beard"
        );

        assert_eq!(
            ctx.repos.services.find_by_provider(&provider.id).await.len(),
            1
        );

        assert!(ctx.repos.services.delete(&service.id).await.unwrap().is_some());
        assert!(ctx.repos.services.find(&service.id).await.is_none());
    }
}
