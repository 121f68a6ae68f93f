use super::{IBookingRepo, InsertBookingError};
use crate::repos::shared::inmemory_repo::*;
use agendo_domain::{Booking, ID};
use chrono::NaiveDate;

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &Booking) -> Result<(), InsertBookingError> {
        // The duplicate check and the push happen under the same lock
        // guard, mirroring the partial unique index of the Postgres repo.
        let mut bookings = self.bookings.lock().unwrap();
        let taken = bookings.iter().any(|b| {
            b.service_id == booking.service_id
                && b.booked_at == booking.booked_at
                && b.is_active()
        });
        if taken {
            return Err(InsertBookingError::SlotTaken);
        }
        bookings.push(booking.clone());
        Ok(())
    }

    async fn save(&self, booking: &Booking) -> anyhow::Result<()> {
        save(booking, &self.bookings);
        Ok(())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        find(booking_id, &self.bookings)
    }

    async fn find_by_client(&self, client_id: &ID) -> Vec<Booking> {
        find_by(&self.bookings, |b| b.client_id == *client_id)
    }

    async fn find_by_services(&self, service_ids: &[ID]) -> Vec<Booking> {
        find_by(&self.bookings, |b| service_ids.contains(&b.service_id))
    }

    async fn find_active_by_services_on_date(
        &self,
        service_ids: &[ID],
        date: NaiveDate,
    ) -> Vec<Booking> {
        find_by(&self.bookings, |b| {
            service_ids.contains(&b.service_id) && b.booked_at.date() == date && b.is_active()
        })
    }
}
