use crate::error::AgendoError;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::create_service::*;
use agendo_domain::{ServiceOffering, ID};
use agendo_infra::Context;

pub async fn create_service_controller(
    http_req: HttpRequest,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = CreateServiceUseCase {
        provider_id: provider.id,
        title: body_params.0.title,
        description: body_params.0.description,
        price_cents: body_params.0.price_cents,
        duration_minutes: body_params.0.duration_minutes,
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Created().json(APIResponse::new(service)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct CreateServiceUseCase {
    pub provider_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyTitle,
    NegativePrice(i64),
    InvalidDuration(i64),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => Self::BadClientData("Title cannot be empty".into()),
            UseCaseError::NegativePrice(price) => {
                Self::BadClientData(format!("Price: {} cannot be negative", price))
            }
            UseCaseError::InvalidDuration(duration) => Self::BadClientData(format!(
                "Duration: {} must be a positive number of minutes",
                duration
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

pub fn validate_service_fields(
    title: &str,
    price_cents: i64,
    duration_minutes: i64,
) -> Result<(), UseCaseError> {
    if title.trim().is_empty() {
        return Err(UseCaseError::EmptyTitle);
    }
    if price_cents < 0 {
        return Err(UseCaseError::NegativePrice(price_cents));
    }
    if duration_minutes <= 0 {
        return Err(UseCaseError::InvalidDuration(duration_minutes));
    }
    Ok(())
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceUseCase {
    type Response = ServiceOffering;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateService";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        validate_service_fields(&self.title, self.price_cents, self.duration_minutes)?;

        let mut service = ServiceOffering::new(
            self.provider_id.clone(),
            self.title.trim(),
            self.price_cents,
            self.duration_minutes,
        );
        service.description = self.description.clone();

        ctx.repos
            .services
            .insert(&service)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(service)
    }
}
