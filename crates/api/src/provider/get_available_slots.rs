use crate::error::AgendoError;
use crate::provider::get_provider::find_provider;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agendo_api_structs::get_available_slots::*;
use agendo_domain::booking_slots::{
    format_slot, generate_slots, SlotWindow, SLOT_GRANULARITY_MINUTES,
};
use agendo_domain::Entity;
use agendo_infra::Context;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;

pub async fn get_available_slots_controller(
    _http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AgendoError> {
    let date = query_params.date;
    let usecase = GetAvailableSlotsUseCase {
        provider: path_params.provider.clone(),
        date,
    };

    execute(usecase, &ctx)
        .await
        .map(|slots| HttpResponse::Ok().json(APIResponse::new(date, slots)))
        .map_err(AgendoError::from)
}

#[derive(Debug)]
pub struct GetAvailableSlotsUseCase {
    pub provider: String,
    pub date: NaiveDate,
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
impl UseCase for GetAvailableSlotsUseCase {
    type Response = Vec<String>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAvailableSlots";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let provider = find_provider(ctx, &self.provider)
            .await
            .ok_or_else(|| UseCaseError::ProviderNotFound(self.provider.clone()))?;

        let day_of_week = self.date.weekday().num_days_from_sunday();
        let window = match ctx
            .repos
            .schedules
            .find_by_provider_and_day(&provider.id, day_of_week)
            .await
        {
            Some(window) => window,
            // A weekday without a window has no availability
            None => return Ok(Vec::new()),
        };

        let services = ctx.repos.services.find_by_provider(&provider.id).await;
        let service_ids: Vec<_> = services.iter().map(|s| s.id().clone()).collect();
        let occupied: HashSet<_> = ctx
            .repos
            .bookings
            .find_active_by_services_on_date(&service_ids, self.date)
            .await
            .into_iter()
            .map(|booking| booking.booked_at.time())
            .collect();

        let slots = generate_slots(
            &SlotWindow {
                start: window.start_time,
                end: window.end_time,
            },
            Duration::minutes(SLOT_GRANULARITY_MINUTES),
            &occupied,
        );

        Ok(slots.into_iter().map(format_slot).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use agendo_domain::{Booking, Role, ScheduleWindow, ServiceOffering, User};
    use agendo_infra::setup_context_inmemory;
    use chrono::NaiveTime;

    fn t(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    // 2026-09-07 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    struct TestContext {
        ctx: Context,
        provider: User,
        service: ServiceOffering,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        ctx.repos.users.insert(&provider).await.unwrap();
        let window = ScheduleWindow::new(provider.id.clone(), 1, t(9, 0), t(12, 0)).unwrap();
        ctx.repos.schedules.insert(&window).await.unwrap();
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        ctx.repos.services.insert(&service).await.unwrap();

        TestContext {
            ctx,
            provider,
            service,
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_lists_every_slot_of_an_open_day() {
        let TestContext { ctx, provider, .. } = setup().await;

        let mut usecase = GetAvailableSlotsUseCase {
            provider: provider.id.as_string(),
            date: monday(),
        };

        let slots = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            slots,
            vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30"]
        );
    }

    #[actix_web::main]
    #[test]
    async fn it_hides_booked_slots() {
        let TestContext {
            ctx,
            provider,
            service,
        } = setup().await;

        let client = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&client).await.unwrap();
        let booking = Booking::new(
            client.id.clone(),
            service.id.clone(),
            monday().and_time(t(10, 0)),
        );
        ctx.repos.bookings.insert(&booking).await.unwrap();

        let mut usecase = GetAvailableSlotsUseCase {
            provider: provider.id.as_string(),
            date: monday(),
        };

        let slots = usecase.execute(&ctx).await.unwrap();
        assert_eq!(slots, vec!["09:00", "09:30", "10:30", "11:00", "11:30"]);
    }

    #[actix_web::main]
    #[test]
    async fn it_returns_no_slots_on_a_closed_day() {
        let TestContext { ctx, provider, .. } = setup().await;

        // 2026-09-08 is a Tuesday, which has no window
        let mut usecase = GetAvailableSlotsUseCase {
            provider: provider.id.as_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 8).unwrap(),
        };

        let slots = usecase.execute(&ctx).await.unwrap();
        assert!(slots.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_an_unknown_provider() {
        let TestContext { ctx, .. } = setup().await;

        let mut usecase = GetAvailableSlotsUseCase {
            provider: "no-such-provider".into(),
            date: monday(),
        };

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::ProviderNotFound(_))
        ));
    }

    #[actix_web::main]
    #[test]
    async fn a_cancelled_booking_frees_its_slot() {
        let TestContext {
            ctx,
            provider,
            service,
        } = setup().await;

        let client = User::new("Joao", "joao@example.com", Role::Client);
        ctx.repos.users.insert(&client).await.unwrap();
        let mut booking = Booking::new(
            client.id.clone(),
            service.id.clone(),
            monday().and_time(t(10, 0)),
        );
        ctx.repos.bookings.insert(&booking).await.unwrap();
        booking.status = agendo_domain::BookingStatus::Cancelled;
        ctx.repos.bookings.save(&booking).await.unwrap();

        let mut usecase = GetAvailableSlotsUseCase {
            provider: provider.id.as_string(),
            date: monday(),
        };

        let slots = usecase.execute(&ctx).await.unwrap();
        assert!(slots.contains(&"10:00".to_string()));
    }
}
