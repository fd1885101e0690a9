use crate::shared::to_datetime;
use chrono::{DateTime, Utc};
use medtrack_domain::{Patient, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatientDTO {
    pub id: ID,
    pub email: String,
    pub is_email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PatientDTO {
    pub fn new(patient: Patient) -> Self {
        Self {
            id: patient.id,
            email: patient.email,
            is_email_verified: patient.is_email_verified,
            first_name: patient.profile.first_name,
            last_name: patient.profile.last_name,
            mobile_number: patient.profile.mobile_number,
            date_of_birth: patient.date_of_birth.map(to_datetime),
            created_at: to_datetime(patient.created),
        }
    }
}
