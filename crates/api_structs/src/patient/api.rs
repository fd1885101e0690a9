use crate::dtos::{DoctorDTO, PatientDTO};
use medtrack_domain::{Doctor, Patient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub patient: PatientDTO,
}

impl PatientResponse {
    pub fn new(patient: Patient) -> Self {
        Self {
            patient: PatientDTO::new(patient),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientsResponse {
    pub patients: Vec<PatientDTO>,
}

impl PatientsResponse {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients: patients.into_iter().map(PatientDTO::new).collect(),
        }
    }
}

/// Changes to the own profile, absent fields are left untouched
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequestBody {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

pub mod get_me {
    use super::*;

    pub type APIResponse = PatientResponse;
}

pub mod get_patients {
    use super::*;

    pub type APIResponse = PatientsResponse;
}

pub mod get_current_doctor {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub doctor: DoctorDTO,
    }

    impl APIResponse {
        pub fn new(doctor: Doctor) -> Self {
            Self {
                doctor: DoctorDTO::new(doctor),
            }
        }
    }
}

pub mod update_patient {
    use super::*;

    pub type RequestBody = UpdateProfileRequestBody;

    pub type APIResponse = PatientResponse;
}
