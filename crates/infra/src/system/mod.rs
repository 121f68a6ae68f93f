use chrono::{Local, NaiveDateTime};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current local date-time. The platform works with a single
    /// implicit local time, there is no timezone handling.
    fn now(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
