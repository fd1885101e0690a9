use crate::{APIResponse, BaseClient};
use medtrack_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PatientClient {
    base: Arc<BaseClient>,
}

pub type UpdateProfileInput = UpdateProfileRequestBody;

impl PatientClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("patient".into(), StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateProfileInput) -> APIResponse<update_patient::APIResponse> {
        self.base
            .patch(input, "patient".into(), StatusCode::OK)
            .await
    }

    pub async fn current_doctor(&self) -> APIResponse<get_current_doctor::APIResponse> {
        self.base.get("patient/doctor".into(), StatusCode::OK).await
    }

    pub async fn get_all(&self) -> APIResponse<get_patients::APIResponse> {
        self.base.get("patients".into(), StatusCode::OK).await
    }
}
