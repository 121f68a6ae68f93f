use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::update_schedule::*;
use agendo_domain::{InvalidScheduleWindowError, ScheduleWindow, ID};
use agendo_infra::Context;
use chrono::NaiveTime;

pub async fn update_schedule_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = UpdateScheduleUseCase {
        provider_id: provider.id,
        schedule_id: path_params.schedule_id.clone(),
        day_of_week: body_params.0.day_of_week,
        start_time: body_params.0.start_time,
        end_time: body_params.0.end_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|window| HttpResponse::Ok().json(APIResponse::new(window)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct UpdateScheduleUseCase {
    pub provider_id: ID,
    pub schedule_id: ID,
    pub day_of_week: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug)]
pub enum UseCaseError {
    ScheduleNotFound(ID),
    InvalidWindow(InvalidScheduleWindowError),
    DayAlreadyScheduled(u32),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ScheduleNotFound(id) => {
                Self::NotFound(format!("The schedule window with id: {}, was not found.", id))
            }
            UseCaseError::InvalidWindow(e) => Self::BadClientData(e.to_string()),
            UseCaseError::DayAlreadyScheduled(day) => Self::Conflict(format!(
                "There already is a schedule window for day of week: {}",
                day
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateScheduleUseCase {
    type Response = ScheduleWindow;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateSchedule";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut window = match ctx.repos.schedules.find(&self.schedule_id).await {
            Some(window) if window.provider_id == self.provider_id => window,
            _ => return Err(UseCaseError::ScheduleNotFound(self.schedule_id.clone())),
        };

        ScheduleWindow::validate_times(self.day_of_week, self.start_time, self.end_time)
            .map_err(UseCaseError::InvalidWindow)?;

        // Moving the window to another weekday must not collide with an
        // existing window on that weekday.
        if let Some(other) = ctx
            .repos
            .schedules
            .find_by_provider_and_day(&self.provider_id, self.day_of_week)
            .await
        {
            if other.id != window.id {
                return Err(UseCaseError::DayAlreadyScheduled(self.day_of_week));
            }
        }

        window.day_of_week = self.day_of_week;
        window.start_time = self.start_time;
        window.end_time = self.end_time;

        ctx.repos
            .schedules
            .save(&window)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(window)
    }
}
