use crate::shared::entity::{Entity, ID};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recurring weekly availability block for a provider. A provider has
/// at most one window per weekday, so a weekday either has a single
/// contiguous open interval or no availability at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub id: ID,
    pub provider_id: ID,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidScheduleWindowError {
    #[error("Start time must be before end time")]
    StartNotBeforeEnd,
    #[error("Day of week: {0} is not in the range 0 (Sunday) to 6 (Saturday)")]
    InvalidDayOfWeek(u32),
}

impl ScheduleWindow {
    pub fn new(
        provider_id: ID,
        day_of_week: u32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, InvalidScheduleWindowError> {
        Self::validate_times(day_of_week, start_time, end_time)?;
        Ok(Self {
            id: Default::default(),
            provider_id,
            day_of_week,
            start_time,
            end_time,
        })
    }

    pub fn validate_times(
        day_of_week: u32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<(), InvalidScheduleWindowError> {
        if day_of_week > 6 {
            return Err(InvalidScheduleWindowError::InvalidDayOfWeek(day_of_week));
        }
        if start_time >= end_time {
            return Err(InvalidScheduleWindowError::StartNotBeforeEnd);
        }
        Ok(())
    }

    /// Whether this window covers the given time of day. The interval is
    /// start-inclusive and end-exclusive.
    pub fn covers(&self, time_of_day: NaiveTime) -> bool {
        self.start_time <= time_of_day && self.end_time > time_of_day
    }
}

impl Entity for ScheduleWindow {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    #[test]
    fn it_rejects_invalid_windows() {
        assert_eq!(
            ScheduleWindow::new(Default::default(), 1, t(12, 0), t(9, 0)).unwrap_err(),
            InvalidScheduleWindowError::StartNotBeforeEnd
        );
        assert_eq!(
            ScheduleWindow::new(Default::default(), 1, t(9, 0), t(9, 0)).unwrap_err(),
            InvalidScheduleWindowError::StartNotBeforeEnd
        );
        assert_eq!(
            ScheduleWindow::new(Default::default(), 7, t(9, 0), t(12, 0)).unwrap_err(),
            InvalidScheduleWindowError::InvalidDayOfWeek(7)
        );
    }

    #[test]
    fn window_interval_is_start_inclusive_end_exclusive() {
        let window = ScheduleWindow::new(Default::default(), 1, t(9, 0), t(12, 0)).unwrap();

        assert!(window.covers(t(9, 0)));
        assert!(window.covers(t(11, 59)));
        assert!(!window.covers(t(12, 0)));
        assert!(!window.covers(t(8, 59)));
    }
}
