use crate::error::AgendoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::get_provider::*;
use agendo_domain::{ScheduleWindow, ServiceOffering, User, ID};
use agendo_infra::Context;

/// Resolves the `{provider}` path segment, which is either a provider id
/// or a provider slug.
pub async fn find_provider(ctx: &Context, provider: &str) -> Option<User> {
    let user = match provider.parse::<ID>() {
        Ok(id) => ctx.repos.users.find(&id).await,
        Err(_) => ctx.repos.users.find_by_slug(provider).await,
    };
    user.filter(User::is_provider)
}

pub async fn get_provider_controller(
    _http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let usecase = GetProviderUseCase {
        provider: path_params.provider.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(&res.provider, res.services, res.schedules))
        })
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct GetProviderUseCase {
    pub provider: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub provider: User,
    pub services: Vec<ServiceOffering>,
    pub schedules: Vec<ScheduleWindow>,
}

#[derive(Debug)]
pub enum UseCaseError {
    ProviderNotFound(String),
}

impl From<UseCaseError> for AgendoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProviderNotFound(provider) => {
                Self::NotFound(format!("The provider: {}, was not found.", provider))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProviderUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProvider";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let provider = find_provider(ctx, &self.provider)
            .await
            .ok_or_else(|| UseCaseError::ProviderNotFound(self.provider.clone()))?;

        let services = ctx.repos.services.find_by_provider(&provider.id).await;
        let schedules = ctx.repos.schedules.find_by_provider(&provider.id).await;

        Ok(UseCaseRes {
            provider,
            services,
            schedules,
        })
    }
}
