use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::create_schedule::*;
use agendo_domain::{InvalidScheduleWindowError, ScheduleWindow, ID};
use agendo_infra::{Context, InsertScheduleError};
use chrono::NaiveTime;

pub async fn create_schedule_controller(
    http_req: HttpRequest,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = CreateScheduleUseCase {
        provider_id: provider.id,
        day_of_week: body_params.0.day_of_week,
        start_time: body_params.0.start_time,
        end_time: body_params.0.end_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|window| HttpResponse::Created().json(APIResponse::new(window)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct CreateScheduleUseCase {
    pub provider_id: ID,
    pub day_of_week: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidWindow(InvalidScheduleWindowError),
    DayAlreadyScheduled(u32),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
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
impl UseCase for CreateScheduleUseCase {
    type Response = ScheduleWindow;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSchedule";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let window = ScheduleWindow::new(
            self.provider_id.clone(),
            self.day_of_week,
            self.start_time,
            self.end_time,
        )
        .map_err(UseCaseError::InvalidWindow)?;

        // The repo insert is the authority on the one-window-per-weekday
        // rule, so two racing creates cannot both pass a pre-check.
        match ctx.repos.schedules.insert(&window).await {
            Ok(()) => Ok(window),
            Err(InsertScheduleError::DayTaken) => {
                Err(UseCaseError::DayAlreadyScheduled(self.day_of_week))
            }
            Err(InsertScheduleError::Storage(_)) => Err(UseCaseError::Storage),
        }
    }
}
