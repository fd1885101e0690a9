use crate::{APIResponse, BaseClient, ID};
use medtrack_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

pub struct ChangePasswordInput {
    pub user_id: ID,
    pub old_password: String,
    pub new_password: String,
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register_patient(
        &self,
        email: &str,
        password: &str,
    ) -> APIResponse<register_patient::APIResponse> {
        self.base
            .post(
                credentials(email, password),
                "auth/register-patient".into(),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn register_doctor(
        &self,
        email: &str,
        password: &str,
    ) -> APIResponse<register_doctor::APIResponse> {
        self.base
            .post(
                credentials(email, password),
                "auth/register-doctor".into(),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> APIResponse<login::APIResponse> {
        self.base
            .post(
                credentials(email, password),
                "auth/login".into(),
                StatusCode::OK,
            )
            .await
    }

    pub async fn refresh(&self, refresh_token: String) -> APIResponse<refresh_token::APIResponse> {
        let body = refresh_token::RequestBody { refresh_token };
        self.base
            .post(body, "auth/refresh".into(), StatusCode::OK)
            .await
    }

    pub async fn change_password(
        &self,
        input: ChangePasswordInput,
    ) -> APIResponse<change_password::APIResponse> {
        let body = change_password::RequestBody {
            old_password: input.old_password,
            new_password: input.new_password,
        };
        self.base
            .patch(
                body,
                format!("auth/change-password/{}", input.user_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn send_verification_email(
        &self,
    ) -> APIResponse<send_verification_email::APIResponse> {
        self.base
            .post((), "auth/email-verification".into(), StatusCode::OK)
            .await
    }

    pub async fn verify_email(&self, otp: String) -> APIResponse<verify_email::APIResponse> {
        let body = verify_email::RequestBody { otp };
        self.base
            .post(body, "auth/email-verification/verify".into(), StatusCode::OK)
            .await
    }
}
