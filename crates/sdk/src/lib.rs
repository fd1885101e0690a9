mod auth;
mod base;
mod doctor;
mod medication;
mod patient;
mod reminder;
mod status;

pub use auth::{AuthClient, ChangePasswordInput};
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use doctor::DoctorClient;
pub use medication::{CreateMedicationInput, MedicationClient, UpdateMedicationInput};
pub use medtrack_api_structs::dtos::*;
pub use medtrack_domain::{UserRole, ID};
pub use patient::{PatientClient, UpdateProfileInput};
pub use reminder::{CreateReminderInput, ReminderClient};
pub use status::StatusClient;
use std::sync::Arc;

/// Medtrack Server SDK
///
/// The SDK contains methods for interacting with the Medtrack server API.
/// Requests are made on behalf of the user whose access token is given, or
/// anonymously when there is none.
#[derive(Clone)]
pub struct MedtrackSDK {
    address: String,
    pub auth: AuthClient,
    pub doctor: DoctorClient,
    pub medication: MedicationClient,
    pub patient: PatientClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl MedtrackSDK {
    pub fn new(address: String) -> Self {
        Self::with_base(address.clone(), BaseClient::new(address))
    }

    /// SDK acting as the user the access token was issued to
    pub fn with_access_token<T: Into<String>>(&self, access_token: T) -> Self {
        let mut base = BaseClient::new(self.address.clone());
        base.set_access_token(access_token.into());
        Self::with_base(self.address.clone(), base)
    }

    fn with_base(address: String, base: BaseClient) -> Self {
        let base = Arc::new(base);
        let auth = AuthClient::new(base.clone());
        let doctor = DoctorClient::new(base.clone());
        let medication = MedicationClient::new(base.clone());
        let patient = PatientClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            address,
            auth,
            doctor,
            medication,
            patient,
            reminder,
            status,
        }
    }
}
