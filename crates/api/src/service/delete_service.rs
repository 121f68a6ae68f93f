use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::delete_service::*;
use agendo_domain::{ServiceOffering, ID};
use agendo_infra::{Context, DeleteServiceError};

pub async fn delete_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = DeleteServiceUseCase {
        provider_id: provider.id,
        service_id: path_params.service_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct DeleteServiceUseCase {
    pub provider_id: ID,
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    ServiceNotFound(ID),
    ServiceHasBookings(ID),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("The service with id: {}, was not found.", id))
            }
            UseCaseError::ServiceHasBookings(id) => Self::Conflict(format!(
                "The service with id: {}, still has bookings and cannot be deleted.",
                id
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteServiceUseCase {
    type Response = ServiceOffering;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteService";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        match ctx.repos.services.find(&self.service_id).await {
            Some(service) if service.provider_id == self.provider_id => {}
            _ => return Err(UseCaseError::ServiceNotFound(self.service_id.clone())),
        }

        // Bookings are never hard-deleted, so a service with booking
        // history (cancelled included) stays. The Postgres foreign key
        // enforces the same rule against racing inserts.
        let bookings = ctx
            .repos
            .bookings
            .find_by_services(std::slice::from_ref(&self.service_id))
            .await;
        if !bookings.is_empty() {
            return Err(UseCaseError::ServiceHasBookings(self.service_id.clone()));
        }

        match ctx.repos.services.delete(&self.service_id).await {
            Ok(Some(service)) => Ok(service),
            Ok(None) => Err(UseCaseError::ServiceNotFound(self.service_id.clone())),
            Err(DeleteServiceError::HasBookings) => {
                Err(UseCaseError::ServiceHasBookings(self.service_id.clone()))
            }
            Err(DeleteServiceError::Storage(_)) => Err(UseCaseError::Storage),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use agendo_domain::{Role, User};
    use agendo_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn it_deletes_an_owned_service() {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        ctx.repos.users.insert(&provider).await.unwrap();
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        ctx.repos.services.insert(&service).await.unwrap();

        let mut usecase = DeleteServiceUseCase {
            provider_id: provider.id,
            service_id: service.id.clone(),
        };

        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.services.find(&service.id).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_deleting_a_booked_service() {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let client = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&provider).await.unwrap();
        ctx.repos.users.insert(&client).await.unwrap();
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        ctx.repos.services.insert(&service).await.unwrap();

        // Even a cancelled booking keeps its row and blocks the delete
        let mut booking = agendo_domain::Booking::new(
            client.id.clone(),
            service.id.clone(),
            chrono::NaiveDate::from_ymd_opt(2026, 9, 7)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        ctx.repos.bookings.insert(&booking).await.unwrap();
        booking.status = agendo_domain::BookingStatus::Cancelled;
        ctx.repos.bookings.save(&booking).await.unwrap();

        let mut usecase = DeleteServiceUseCase {
            provider_id: provider.id,
            service_id: service.id.clone(),
        };

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::ServiceHasBookings(_))
        ));
        assert!(ctx.repos.services.find(&service.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_deleting_a_foreign_service() {
        let ctx = setup_context_inmemory();
        let owner = User::new("Ana", "ana@example.com", Role::Provider);
        let intruder = User::new("Bia", "bia@example.com", Role::Provider);
        ctx.repos.users.insert(&owner).await.unwrap();
        ctx.repos.users.insert(&intruder).await.unwrap();
        let service = ServiceOffering::new(owner.id.clone(), "Haircut", 12_000, 60);
        ctx.repos.services.insert(&service).await.unwrap();

        let mut usecase = DeleteServiceUseCase {
            provider_id: intruder.id,
            service_id: service.id.clone(),
        };

        assert!(usecase.execute(&ctx).await.is_err());
        assert!(ctx.repos.services.find(&service.id).await.is_some());
    }
}
