mod booking;
mod provider;
mod schedule;
mod service;
mod status;
mod user;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::schedule::dtos::*;
    pub use crate::service::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::provider::api::*;
pub use crate::schedule::api::*;
pub use crate::service::api::*;
pub use crate::status::api::*;
