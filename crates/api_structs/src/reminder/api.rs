use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use medtrack_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReminderPathParams {
    pub reminder_id: ID,
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub patient_id: ID,
        pub medication_id: ID,
        pub time: DateTime<Utc>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub time: DateTime<Utc>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}

pub mod mark_reminder_taken {
    use super::*;

    pub type PathParams = ReminderPathParams;

    pub type APIResponse = ReminderResponse;
}
