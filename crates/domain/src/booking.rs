use crate::shared::entity::{Entity, ID};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a `Booking`.
///
/// Transitions are one-way: a pending booking can be confirmed or
/// cancelled, a confirmed booking can only be cancelled, and cancelled is
/// terminal. A booking is never hard-deleted, so a cancelled row is what
/// frees its slot for rebooking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Error, Debug, PartialEq)]
#[error("Status: {0} is not valid, it should be either 'confirmed' or 'cancelled'")]
pub struct InvalidBookingStatusError(pub String);

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn can_transition_to(&self, new_status: BookingStatus) -> bool {
        match (self, new_status) {
            (Self::Pending, Self::Confirmed) => true,
            (Self::Pending, Self::Cancelled) => true,
            (Self::Confirmed, Self::Cancelled) => true,
            _ => false,
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = InvalidBookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidBookingStatusError(s.to_string())),
        }
    }
}

/// One reservation of a specific date-time for a specific service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: ID,
    pub client_id: ID,
    pub service_id: ID,
    pub booked_at: NaiveDateTime,
    pub status: BookingStatus,
}

impl Booking {
    pub fn new(client_id: ID, service_id: ID, booked_at: NaiveDateTime) -> Self {
        Self {
            id: Default::default(),
            client_id,
            service_id,
            booked_at,
            status: BookingStatus::Pending,
        }
    }

    /// A booking occupies its slot as long as it has not been cancelled.
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_status_case_insensitive_and_trimmed() {
        assert_eq!(
            " Confirmed ".parse::<BookingStatus>(),
            Ok(BookingStatus::Confirmed)
        );
        assert_eq!(
            "CANCELLED".parse::<BookingStatus>(),
            Ok(BookingStatus::Cancelled)
        );
        assert_eq!(
            "pending".parse::<BookingStatus>(),
            Ok(BookingStatus::Pending)
        );
        assert!("done".parse::<BookingStatus>().is_err());
        assert!("".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn state_machine_is_one_way() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));

        // Cancelled is terminal
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Cancelled));

        // No reopening or no-op transitions
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Confirmed));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn cancelled_booking_is_not_active() {
        let mut booking = Booking::new(
            Default::default(),
            Default::default(),
            chrono::NaiveDate::from_ymd_opt(2026, 9, 7)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.is_active());

        booking.status = BookingStatus::Confirmed;
        assert!(booking.is_active());

        booking.status = BookingStatus::Cancelled;
        assert!(!booking.is_active());
    }
}
