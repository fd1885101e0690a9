use crate::shared::to_datetime;
use chrono::{DateTime, Utc};
use medtrack_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub patient_id: ID,
    pub medication_ids: Vec<ID>,
    pub time: DateTime<Utc>,
    pub is_taken: bool,
    pub medication_name: String,
    pub dosage: f64,
    pub patient_mobile_number: String,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            patient_id: reminder.patient_id,
            medication_ids: reminder.medication_ids,
            time: to_datetime(reminder.remind_at),
            is_taken: reminder.is_taken,
            medication_name: reminder.medication_name,
            dosage: reminder.dosage,
            patient_mobile_number: reminder.patient_mobile_number,
        }
    }
}
