mod auth;
mod doctor;
mod medication;
mod patient;
mod reminder;
mod shared;
mod status;

pub mod dtos {
    pub use crate::doctor::dtos::*;
    pub use crate::medication::dtos::*;
    pub use crate::patient::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::doctor::api::*;
pub use crate::medication::api::*;
pub use crate::patient::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
