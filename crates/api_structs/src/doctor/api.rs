use crate::{dtos::DoctorDTO, patient::api::PatientsResponse};
use medtrack_domain::{Doctor, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorResponse {
    pub doctor: DoctorDTO,
}

impl DoctorResponse {
    pub fn new(doctor: Doctor) -> Self {
        Self {
            doctor: DoctorDTO::new(doctor),
        }
    }
}

pub mod get_doctors {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub doctors: Vec<DoctorDTO>,
    }

    impl APIResponse {
        pub fn new(doctors: Vec<Doctor>) -> Self {
            Self {
                doctors: doctors.into_iter().map(DoctorDTO::new).collect(),
            }
        }
    }
}

pub mod get_doctor {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub doctor_id: ID,
    }

    pub type APIResponse = DoctorResponse;
}

pub mod get_doctor_patients {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub doctor_id: ID,
    }

    pub type APIResponse = PatientsResponse;
}

pub mod update_doctor {
    use super::*;
    use crate::patient::api::UpdateProfileRequestBody;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub doctor_id: ID,
    }

    pub type RequestBody = UpdateProfileRequestBody;

    pub type APIResponse = DoctorResponse;
}
