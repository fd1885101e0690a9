use crate::dtos::{DoctorDTO, PatientDTO};
use medtrack_domain::{UserRole, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub mod register_patient {
    use super::*;

    pub type RequestBody = Credentials;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub patient: PatientDTO,
    }
}

pub mod register_doctor {
    use super::*;

    pub type RequestBody = Credentials;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub doctor: DoctorDTO,
    }
}

pub mod login {
    use super::*;

    pub type RequestBody = Credentials;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub user_id: ID,
        pub role: UserRole,
        pub access_token: String,
        pub refresh_token: String,
    }
}

pub mod refresh_token {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub refresh_token: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub access_token: String,
        pub refresh_token: String,
    }
}

pub mod change_password {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub old_password: String,
        pub new_password: String,
    }

    pub type APIResponse = MessageResponse;
}

pub mod send_verification_email {
    use super::*;

    pub type APIResponse = MessageResponse;
}

pub mod verify_email {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub otp: String,
    }

    pub type APIResponse = MessageResponse;
}
