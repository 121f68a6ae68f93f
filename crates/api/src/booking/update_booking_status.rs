use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::update_booking_status::*;
use agendo_domain::{Booking, BookingStatus, ID};
use agendo_infra::Context;

pub async fn update_booking_status_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = UpdateBookingStatusUseCase {
        provider_id: provider.id,
        booking_id: path_params.booking_id.clone(),
        status: body_params.0.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct UpdateBookingStatusUseCase {
    pub provider_id: ID,
    pub booking_id: ID,
    /// Raw status string from the request, parsed case-insensitively.
    pub status: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidStatus(String),
    BookingNotFound(ID),
    NotServiceOwner,
    IllegalTransition(BookingStatus, BookingStatus),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidStatus(status) => Self::BadClientData(format!(
                "Status: {} is not valid, it should be either 'confirmed' or 'cancelled'",
                status
            )),
            UseCaseError::BookingNotFound(id) => {
                Self::NotFound(format!("The booking with id: {}, was not found.", id))
            }
            UseCaseError::NotServiceOwner => Self::Forbidden(
                "Only the provider of the booked service can change a booking status".into(),
            ),
            UseCaseError::IllegalTransition(from, to) => Self::Conflict(format!(
                "A booking cannot go from status: {} to status: {}",
                from, to
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateBookingStatusUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateBookingStatus";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let new_status = match self.status.parse::<BookingStatus>() {
            Ok(BookingStatus::Pending) | Err(_) => {
                return Err(UseCaseError::InvalidStatus(self.status.clone()))
            }
            Ok(status) => status,
        };

        let mut booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(|| UseCaseError::BookingNotFound(self.booking_id.clone()))?;

        let service = ctx
            .repos
            .services
            .find(&booking.service_id)
            .await
            .ok_or_else(|| UseCaseError::BookingNotFound(self.booking_id.clone()))?;
        if service.provider_id != self.provider_id {
            return Err(UseCaseError::NotServiceOwner);
        }

        if !booking.status.can_transition_to(new_status) {
            return Err(UseCaseError::IllegalTransition(booking.status, new_status));
        }

        booking.status = new_status;
        ctx.repos
            .bookings
            .save(&booking)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(booking)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use agendo_domain::{Role, ServiceOffering, User};
    use agendo_infra::setup_context_inmemory;
    use chrono::NaiveDate;

    struct TestContext {
        ctx: Context,
        provider: User,
        booking: Booking,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let client = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&provider).await.unwrap();
        ctx.repos.users.insert(&client).await.unwrap();
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        ctx.repos.services.insert(&service).await.unwrap();
        let booking = Booking::new(
            client.id.clone(),
            service.id.clone(),
            NaiveDate::from_ymd_opt(2026, 9, 7)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        ctx.repos.bookings.insert(&booking).await.unwrap();

        TestContext {
            ctx,
            provider,
            booking,
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_confirms_and_then_cancels_a_booking() {
        let TestContext {
            ctx,
            provider,
            booking,
        } = setup().await;

        let mut confirm = UpdateBookingStatusUseCase {
            provider_id: provider.id.clone(),
            booking_id: booking.id.clone(),
            status: " Confirmed ".into(),
        };
        let confirmed = confirm.execute(&ctx).await.unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);

        let mut cancel = UpdateBookingStatusUseCase {
            provider_id: provider.id,
            booking_id: booking.id,
            status: "cancelled".into(),
        };
        let cancelled = cancel.execute(&ctx).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_status_strings() {
        let TestContext {
            ctx,
            provider,
            booking,
        } = setup().await;

        for status in ["done", "", "pending"] {
            let mut usecase = UpdateBookingStatusUseCase {
                provider_id: provider.id.clone(),
                booking_id: booking.id.clone(),
                status: status.into(),
            };
            assert!(matches!(
                usecase.execute(&ctx).await,
                Err(UseCaseError::InvalidStatus(_))
            ));
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_a_foreign_provider() {
        let TestContext { ctx, booking, .. } = setup().await;

        let intruder = User::new("Bia", "bia@example.com", Role::Provider);
        ctx.repos.users.insert(&intruder).await.unwrap();

        let mut usecase = UpdateBookingStatusUseCase {
            provider_id: intruder.id,
            booking_id: booking.id,
            status: "confirmed".into(),
        };

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotServiceOwner)
        ));
    }

    #[actix_web::main]
    #[test]
    async fn a_cancelled_booking_stays_cancelled() {
        let TestContext {
            ctx,
            provider,
            booking,
        } = setup().await;

        let mut cancel = UpdateBookingStatusUseCase {
            provider_id: provider.id.clone(),
            booking_id: booking.id.clone(),
            status: "cancelled".into(),
        };
        cancel.execute(&ctx).await.unwrap();

        let mut confirm = UpdateBookingStatusUseCase {
            provider_id: provider.id,
            booking_id: booking.id,
            status: "confirmed".into(),
        };
        assert!(matches!(
            confirm.execute(&ctx).await,
            Err(UseCaseError::IllegalTransition(
                BookingStatus::Cancelled,
                BookingStatus::Confirmed
            ))
        ));
    }
}
