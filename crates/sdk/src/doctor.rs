use crate::{APIResponse, BaseClient, UpdateProfileInput, ID};
use medtrack_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DoctorClient {
    base: Arc<BaseClient>,
}

impl DoctorClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_doctors::APIResponse> {
        self.base.get("doctors".into(), StatusCode::OK).await
    }

    pub async fn get(&self, doctor_id: &ID) -> APIResponse<get_doctor::APIResponse> {
        self.base
            .get(format!("doctors/{}", doctor_id), StatusCode::OK)
            .await
    }

    pub async fn patients(&self, doctor_id: &ID) -> APIResponse<get_doctor_patients::APIResponse> {
        self.base
            .get(format!("doctors/{}/patients", doctor_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        doctor_id: &ID,
        input: UpdateProfileInput,
    ) -> APIResponse<update_doctor::APIResponse> {
        self.base
            .patch(input, format!("doctors/{}", doctor_id), StatusCode::OK)
            .await
    }
}
