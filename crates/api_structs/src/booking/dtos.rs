use agendo_domain::{Booking, BookingStatus, ID};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub client_id: ID,
    pub service_id: ID,
    pub booked_at: NaiveDateTime,
    pub status: BookingStatus,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            client_id: booking.client_id,
            service_id: booking.service_id,
            booked_at: booking.booked_at,
            status: booking.status,
        }
    }
}
