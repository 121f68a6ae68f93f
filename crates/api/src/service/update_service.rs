use crate::error::AgendoError;
use crate::service::create_service::validate_service_fields;
use crate::shared::auth::protect_provider_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::update_service::*;
use agendo_domain::{ServiceOffering, ID};
use agendo_infra::Context;

pub async fn update_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let provider = protect_provider_route(&http_req, &ctx).await?;

    let usecase = UpdateServiceUseCase {
        provider_id: provider.id,
        service_id: path_params.service_id.clone(),
        title: body_params.0.title,
        description: body_params.0.description,
        price_cents: body_params.0.price_cents,
        duration_minutes: body_params.0.duration_minutes,
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct UpdateServiceUseCase {
    pub provider_id: ID,
    pub service_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    ServiceNotFound(ID),
    InvalidFields(crate::service::create_service::UseCaseError),
    Storage,
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("The service with id: {}, was not found.", id))
            }
            UseCaseError::InvalidFields(e) => e.into(),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = ServiceOffering;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateService";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut service = match ctx.repos.services.find(&self.service_id).await {
            Some(service) if service.provider_id == self.provider_id => service,
            _ => return Err(UseCaseError::ServiceNotFound(self.service_id.clone())),
        };

        validate_service_fields(&self.title, self.price_cents, self.duration_minutes)
            .map_err(UseCaseError::InvalidFields)?;

        service.title = self.title.trim().to_string();
        service.description = self.description.clone();
        service.price_cents = self.price_cents;
        service.duration_minutes = self.duration_minutes;

        ctx.repos
            .services
            .save(&service)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(service)
    }
}
