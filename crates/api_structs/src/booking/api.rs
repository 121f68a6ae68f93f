use crate::dtos::BookingDTO;
use agendo_domain::{Booking, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

pub mod create_booking {
    use super::*;
    use chrono::NaiveDateTime;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub service_id: ID,
        pub booked_at: NaiveDateTime,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_bookings {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub bookings: Vec<BookingDTO>,
    }

    impl APIResponse {
        pub fn new(bookings: Vec<Booking>) -> Self {
            Self {
                bookings: bookings.into_iter().map(BookingDTO::new).collect(),
            }
        }
    }
}

pub mod get_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod update_booking_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    pub struct RequestBody {
        pub status: String,
    }

    pub type APIResponse = BookingResponse;
}
