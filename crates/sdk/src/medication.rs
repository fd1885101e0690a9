use crate::{APIResponse, BaseClient, ID};
use medtrack_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct MedicationClient {
    base: Arc<BaseClient>,
}

pub type CreateMedicationInput = create_medication::RequestBody;
pub type UpdateMedicationInput = update_medication::RequestBody;

impl MedicationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateMedicationInput,
    ) -> APIResponse<create_medication::APIResponse> {
        self.base
            .post(input, "medication".into(), StatusCode::CREATED)
            .await
    }

    pub async fn current(&self) -> APIResponse<get_current_medications::APIResponse> {
        self.base
            .get("medication/current".into(), StatusCode::OK)
            .await
    }

    pub async fn history(&self) -> APIResponse<get_medication_history::APIResponse> {
        self.base
            .get("medication/history".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self, medication_id: &ID) -> APIResponse<get_medication::APIResponse> {
        self.base
            .get(format!("medication/{}", medication_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        medication_id: &ID,
        input: UpdateMedicationInput,
    ) -> APIResponse<update_medication::APIResponse> {
        self.base
            .patch(input, format!("medication/{}", medication_id), StatusCode::OK)
            .await
    }

    pub async fn complete(
        &self,
        medication_id: &ID,
    ) -> APIResponse<complete_medication::APIResponse> {
        self.base
            .patch(
                (),
                format!("medication/{}/complete", medication_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn reminders(
        &self,
        medication_id: &ID,
    ) -> APIResponse<get_medication_reminders::APIResponse> {
        self.base
            .get(
                format!("medication/{}/reminders", medication_id),
                StatusCode::OK,
            )
            .await
    }
}
