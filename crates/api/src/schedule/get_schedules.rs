use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::get_schedules::*;
use agendo_domain::{ScheduleWindow, ID};
use agendo_infra::Context;

pub async fn get_schedules_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = GetSchedulesUseCase {
        provider_id: provider.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|windows| HttpResponse::Ok().json(APIResponse::new(windows)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct GetSchedulesUseCase {
    pub provider_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSchedulesUseCase {
    type Response = Vec<ScheduleWindow>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSchedules";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.schedules.find_by_provider(&self.provider_id).await)
    }
}
