use crate::error::AgendoError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::get_bookings::*;
use agendo_domain::{Booking, Entity, User};
use agendo_infra::Context;

pub async fn get_bookings_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetBookingsUseCase { user };

    execute(usecase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct GetBookingsUseCase {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBookings";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let bookings = if self.user.is_provider() {
            let services = ctx.repos.services.find_by_provider(&self.user.id).await;
            let service_ids: Vec<_> = services.iter().map(|s| s.id().clone()).collect();
            ctx.repos.bookings.find_by_services(&service_ids).await
        } else {
            ctx.repos.bookings.find_by_client(&self.user.id).await
        };

        Ok(bookings)
    }
}
