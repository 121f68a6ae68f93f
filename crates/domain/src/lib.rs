mod booking;
pub mod booking_slots;
mod schedule;
mod service;
mod shared;
mod user;

pub use booking::{Booking, BookingStatus, InvalidBookingStatusError};
pub use schedule::{InvalidScheduleWindowError, ScheduleWindow};
pub use service::ServiceOffering;
pub use shared::entity::{Entity, ID};
pub use user::{Role, User};
