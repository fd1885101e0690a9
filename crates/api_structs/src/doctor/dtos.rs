use crate::shared::to_datetime;
use chrono::{DateTime, Utc};
use medtrack_domain::{Doctor, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDTO {
    pub id: ID,
    pub email: String,
    pub is_email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DoctorDTO {
    pub fn new(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            email: doctor.email,
            is_email_verified: doctor.is_email_verified,
            first_name: doctor.profile.first_name,
            last_name: doctor.profile.last_name,
            mobile_number: doctor.profile.mobile_number,
            created_at: to_datetime(doctor.created),
        }
    }
}
