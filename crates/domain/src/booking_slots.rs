use chrono::{Duration, NaiveTime};
use std::collections::HashSet;

/// Every bookable slot starts on a multiple of this granularity from the
/// window start, regardless of the duration of the service being booked.
pub const SLOT_GRANULARITY_MINUTES: i64 = 30;

/// The open interval of a single weekday, extracted from a
/// `ScheduleWindow`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Computes the free slot start times within `window`.
///
/// A time `t` is a slot when `t >= start`, `t + granularity <= end` and
/// `t` is not occupied, stepping by `granularity` from `start`. The result
/// is in chronological order. A window shorter than one granularity unit
/// yields no slots.
pub fn generate_slots(
    window: &SlotWindow,
    granularity: Duration,
    occupied: &HashSet<NaiveTime>,
) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if granularity <= Duration::zero() {
        return slots;
    }

    let mut cursor = window.start;
    loop {
        // overflowing_add_signed instead of plain Add, which silently
        // wraps past midnight
        let (slot_end, overflow) = cursor.overflowing_add_signed(granularity);
        if overflow != 0 || slot_end > window.end {
            break;
        }
        if !occupied.contains(&cursor) {
            slots.push(cursor);
        }
        cursor = slot_end;
    }

    slots
}

/// Renders a slot start time as `HH:MM`.
pub fn format_slot(slot: NaiveTime) -> String {
    slot.format("%H:%M").to_string()
}
