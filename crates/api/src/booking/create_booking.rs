use crate::error::AgendoError;
use crate::shared::auth::protect_client_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::create_booking::*;
use agendo_domain::{Booking, ID};
use agendo_infra::{Context, InsertBookingError};
use chrono::{Datelike, NaiveDateTime};

pub async fn create_booking_controller(
    http_req: HttpRequest,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let client = protect_client_route(&http_req, &ctx).await?;

    let usecase = CreateBookingUseCase {
        client_id: client.id,
        service_id: body_params.0.service_id,
        booked_at: body_params.0.booked_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub client_id: ID,
    pub service_id: ID,
    pub booked_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum UseCaseError {
    DateNotFuture(NaiveDateTime),
    ServiceNotFound(ID),
    TimeNotAvailable(NaiveDateTime),
    SlotTaken,
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::DateNotFuture(booked_at) => Self::BadClientData(format!(
                "The booking date must be future, got: {}",
                booked_at
            )),
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("The service not found, id: {}", id))
            }
            UseCaseError::TimeNotAvailable(booked_at) => Self::BadClientData(format!(
                "The time not available for booking: {}",
                booked_at
            )),
            UseCaseError::SlotTaken => Self::Conflict("The slot already taken".into()),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.booked_at <= ctx.sys.now() {
            return Err(UseCaseError::DateNotFuture(self.booked_at));
        }

        let service = ctx
            .repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::ServiceNotFound(self.service_id.clone()))?;

        let day_of_week = self.booked_at.date().weekday().num_days_from_sunday();
        let window = ctx
            .repos
            .schedules
            .find_by_provider_and_day(&service.provider_id, day_of_week)
            .await
            .ok_or(UseCaseError::TimeNotAvailable(self.booked_at))?;

        // The window covers start-inclusive, end-exclusive. Any covered
        // time-of-day is bookable, the 30-minute grid only drives the
        // availability listing.
        if !window.covers(self.booked_at.time()) {
            return Err(UseCaseError::TimeNotAvailable(self.booked_at));
        }

        let booking = Booking::new(self.client_id.clone(), service.id, self.booked_at);
        match ctx.repos.bookings.insert(&booking).await {
            Ok(()) => Ok(booking),
            Err(InsertBookingError::SlotTaken) => Err(UseCaseError::SlotTaken),
            Err(InsertBookingError::Storage(_)) => Err(UseCaseError::Storage),
        }
    }
}
