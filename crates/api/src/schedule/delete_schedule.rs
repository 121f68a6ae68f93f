use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::delete_schedule::*;
use agendo_domain::{ScheduleWindow, ID};
use agendo_infra::Context;

pub async fn delete_schedule_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = DeleteScheduleUseCase {
        provider_id: provider.id,
        schedule_id: path_params.schedule_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|window| HttpResponse::Ok().json(APIResponse::new(window)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct DeleteScheduleUseCase {
    pub provider_id: ID,
    pub schedule_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    ScheduleNotFound(ID),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ScheduleNotFound(id) => {
                Self::NotFound(format!("The schedule window with id: {}, was not found.", id))
            }
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteScheduleUseCase {
    type Response = ScheduleWindow;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteSchedule";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        match ctx.repos.schedules.find(&self.schedule_id).await {
            Some(window) if window.provider_id == self.provider_id => ctx
                .repos
                .schedules
                .delete(&self.schedule_id)
                .await
                .ok_or(UseCaseError::Storage),
            _ => Err(UseCaseError::ScheduleNotFound(self.schedule_id.clone())),
        }
    }
}
