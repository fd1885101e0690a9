use crate::shared::to_datetime;
use chrono::{DateTime, Utc};
use medtrack_domain::{Medication, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDTO {
    pub id: ID,
    pub patient_id: ID,
    pub doctor_id: ID,
    pub medication_name: String,
    pub diagnosis: String,
    pub times_to_be_taken: i64,
    pub dosage: f64,
    pub duration_in_hours: i64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl MedicationDTO {
    pub fn new(medication: Medication) -> Self {
        Self {
            id: medication.id,
            patient_id: medication.patient_id,
            doctor_id: medication.doctor_id,
            medication_name: medication.medication_name,
            diagnosis: medication.diagnosis,
            times_to_be_taken: medication.times_to_be_taken,
            dosage: medication.dosage,
            duration_in_hours: medication.duration_in_hours,
            is_completed: medication.is_completed,
            created_at: to_datetime(medication.created),
        }
    }
}
