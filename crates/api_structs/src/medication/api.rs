use crate::dtos::{MedicationDTO, ReminderDTO};
use medtrack_domain::{Medication, Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationResponse {
    pub medication: MedicationDTO,
}

impl MedicationResponse {
    pub fn new(medication: Medication) -> Self {
        Self {
            medication: MedicationDTO::new(medication),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationsResponse {
    pub medications: Vec<MedicationDTO>,
}

impl MedicationsResponse {
    pub fn new(medications: Vec<Medication>) -> Self {
        Self {
            medications: medications.into_iter().map(MedicationDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MedicationPathParams {
    pub medication_id: ID,
}

pub mod create_medication {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub patient_id: ID,
        pub medication_name: String,
        pub diagnosis: String,
        pub times_to_be_taken: i64,
        pub dosage: f64,
        pub duration_in_hours: i64,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub medication: MedicationDTO,
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(medication: Medication, reminders: Vec<Reminder>) -> Self {
            Self {
                medication: MedicationDTO::new(medication),
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_current_medications {
    use super::*;

    pub type APIResponse = MedicationsResponse;
}

pub mod get_medication_history {
    use super::*;

    pub type APIResponse = MedicationsResponse;
}

pub mod get_medication {
    use super::*;

    pub type PathParams = MedicationPathParams;

    pub type APIResponse = MedicationResponse;
}

pub mod update_medication {
    use super::*;

    pub type PathParams = MedicationPathParams;

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub medication_name: Option<String>,
        #[serde(default)]
        pub diagnosis: Option<String>,
        #[serde(default)]
        pub times_to_be_taken: Option<i64>,
        #[serde(default)]
        pub dosage: Option<f64>,
        #[serde(default)]
        pub duration_in_hours: Option<i64>,
    }

    pub type APIResponse = MedicationResponse;
}

pub mod complete_medication {
    use super::*;

    pub type PathParams = MedicationPathParams;

    pub type APIResponse = MedicationResponse;
}

pub mod get_medication_reminders {
    use super::*;

    pub type PathParams = MedicationPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
