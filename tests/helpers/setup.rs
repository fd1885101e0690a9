use medtrack_api::Application;
use medtrack_infra::{InMemoryEmailService, MedtrackContext, Services};
use medtrack_sdk::{MedtrackSDK, ID};
use std::sync::Arc;

pub struct TestApp {
    pub email: Arc<InMemoryEmailService>,
}

impl TestApp {
    /// Code of the last verification email sent to `to`
    pub fn last_otp(&self, to: &str) -> Option<String> {
        self.email
            .sent()
            .into_iter()
            .rev()
            .find(|e| e.to == to)
            .and_then(|e| e.text.split_whitespace().last().map(String::from))
    }
}

pub struct LoggedInUser {
    pub id: ID,
    pub sdk: MedtrackSDK,
    pub refresh_token: String,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, MedtrackSDK) {
    let email = Arc::new(InMemoryEmailService::new());
    let mut ctx = MedtrackContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.services = Services {
        email: email.clone(),
        ..Services::create_inmemory()
    };

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    (TestApp { email }, MedtrackSDK::new(address))
}

pub async fn login(sdk: &MedtrackSDK, email: &str, password: &str) -> LoggedInUser {
    let res = sdk
        .auth
        .login(email, password)
        .await
        .expect("Expected to log in");
    LoggedInUser {
        id: res.user_id,
        sdk: sdk.with_access_token(res.access_token),
        refresh_token: res.refresh_token,
    }
}

pub async fn register_patient(sdk: &MedtrackSDK, email: &str) -> LoggedInUser {
    sdk.auth
        .register_patient(email, "secret-password")
        .await
        .expect("Expected to register patient");
    login(sdk, email, "secret-password").await
}

pub async fn register_doctor(sdk: &MedtrackSDK, email: &str) -> LoggedInUser {
    sdk.auth
        .register_doctor(email, "secret-password")
        .await
        .expect("Expected to register doctor");
    login(sdk, email, "secret-password").await
}
