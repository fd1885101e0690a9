use crate::{APIResponse, BaseClient, ID};
use chrono::{DateTime, Utc};
use medtrack_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub type CreateReminderInput = create_reminder::RequestBody;

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        self.base
            .post(input, "reminder".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, reminder_id: &ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminder/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn reschedule(
        &self,
        reminder_id: &ID,
        time: DateTime<Utc>,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody { time };
        self.base
            .patch(body, format!("reminder/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, reminder_id: &ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminder/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn mark_taken(
        &self,
        reminder_id: &ID,
    ) -> APIResponse<mark_reminder_taken::APIResponse> {
        self.base
            .patch((), format!("reminder/{}/taken", reminder_id), StatusCode::OK)
            .await
    }
}
