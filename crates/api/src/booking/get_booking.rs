use crate::error::AgendoError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::get_booking::*;
use agendo_domain::{Booking, User, ID};
use agendo_infra::Context;

pub async fn get_booking_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetBookingUseCase {
        user,
        booking_id: path_params.booking_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct GetBookingUseCase {
    pub user: User,
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    BookingNotFound(ID),
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::BookingNotFound(id) => {
                Self::NotFound(format!("The booking with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBooking";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let not_found = || UseCaseError::BookingNotFound(self.booking_id.clone());

        let booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(not_found)?;

        // Visible to its client and to the provider of its service. Anyone
        // else gets the same answer as a missing booking.
        if booking.client_id == self.user.id {
            return Ok(booking);
        }
        let service = ctx
            .repos
            .services
            .find(&booking.service_id)
            .await
            .ok_or_else(not_found)?;
        if service.provider_id == self.user.id {
            return Ok(booking);
        }

        Err(not_found())
    }
}
