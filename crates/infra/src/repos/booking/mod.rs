mod inmemory;
mod postgres;

use agendo_domain::{Booking, ID};
use chrono::NaiveDate;
pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsertBookingError {
    /// A non-cancelled booking already holds the same (service, date-time)
    /// pair. Raised by the storage layer itself so that two racing inserts
    /// can never both succeed.
    #[error("The time slot is already taken")]
    SlotTaken,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    /// Inserts a booking, atomically enforcing that at most one
    /// non-cancelled booking exists per (service, date-time).
    async fn insert(&self, booking: &Booking) -> Result<(), InsertBookingError>;
    async fn save(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn find(&self, booking_id: &ID) -> Option<Booking>;
    async fn find_by_client(&self, client_id: &ID) -> Vec<Booking>;
    async fn find_by_services(&self, service_ids: &[ID]) -> Vec<Booking>;
    /// Non-cancelled bookings for any of the given services whose
    /// date-time falls on the given calendar date.
    async fn find_active_by_services_on_date(
        &self,
        service_ids: &[ID],
        date: NaiveDate,
    ) -> Vec<Booking>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_context_inmemory;
    use agendo_domain::{Booking, BookingStatus, Role, ServiceOffering, User};
    use chrono::NaiveDate;

    fn booked_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 7)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_active_slot() {
        let ctx = setup_context_inmemory();
        let client = User::new("Joao", "joao@example.com", Role::Client);
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);

        let booking = Booking::new(client.id.clone(), service.id.clone(), booked_at());
        ctx.repos
            .bookings
            .insert(&booking)
            .await
            .expect("To insert booking");

        let duplicate = Booking::new(client.id.clone(), service.id.clone(), booked_at());
        match ctx.repos.bookings.insert(&duplicate).await {
            Err(InsertBookingError::SlotTaken) => (),
            other => panic!("Expected SlotTaken, got: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn cancelled_booking_frees_the_slot() {
        let ctx = setup_context_inmemory();
        let client = User::new("Joao", "joao@example.com", Role::Client);
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);

        let mut booking = Booking::new(client.id.clone(), service.id.clone(), booked_at());
        ctx.repos.bookings.insert(&booking).await.unwrap();

        booking.status = BookingStatus::Cancelled;
        ctx.repos.bookings.save(&booking).await.unwrap();

        let rebooking = Booking::new(client.id.clone(), service.id.clone(), booked_at());
        assert!(ctx.repos.bookings.insert(&rebooking).await.is_ok());
    }

    #[tokio::test]
    async fn concurrent_inserts_for_same_slot_admit_exactly_one() {
        let ctx = setup_context_inmemory();
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);

        let attempts = 10;
        let mut handles = Vec::new();
        for i in 0..attempts {
            let bookings = ctx.repos.bookings.clone();
            let service_id = service.id.clone();
            handles.push(tokio::spawn(async move {
                let client = User::new(&format!("Client {}", i), "c@example.com", Role::Client);
                let booking = Booking::new(client.id, service_id, booked_at());
                bookings.insert(&booking).await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(InsertBookingError::SlotTaken) => conflicts += 1,
                Err(e) => panic!("Unexpected error: {}", e),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, attempts - 1);
    }

    #[tokio::test]
    async fn finds_active_bookings_by_services_and_date() {
        let ctx = setup_context_inmemory();
        let client = User::new("Joao", "joao@example.com", Role::Client);
        let provider = User::new("Ana", "ana@example.com", Role::Provider);
        let service = ServiceOffering::new(provider.id.clone(), "Haircut", 12_000, 60);
        let other_service = ServiceOffering::new(provider.id.clone(), "Beard", 5_000, 30);

        let date = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();

        let booking = Booking::new(
            client.id.clone(),
            service.id.clone(),
            date.and_hms_opt(10, 0, 0).unwrap(),
        );
        let mut cancelled = Booking::new(
            client.id.clone(),
            service.id.clone(),
            date.and_hms_opt(11, 0, 0).unwrap(),
        );
        cancelled.status = BookingStatus::Cancelled;
        let other_day = Booking::new(
            client.id.clone(),
            other_service.id.clone(),
            date.succ_opt().unwrap().and_hms_opt(10, 0, 0).unwrap(),
        );

        ctx.repos.bookings.insert(&booking).await.unwrap();
        // cancelled rows bypass the uniqueness guard, insert then save
        let mut as_pending = cancelled.clone();
        as_pending.status = BookingStatus::Pending;
        ctx.repos.bookings.insert(&as_pending).await.unwrap();
        ctx.repos.bookings.save(&cancelled).await.unwrap();
        ctx.repos.bookings.insert(&other_day).await.unwrap();

        let service_ids = vec![service.id.clone(), other_service.id.clone()];
        let active = ctx
            .repos
            .bookings
            .find_active_by_services_on_date(&service_ids, date)
            .await;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, booking.id);
    }
}
