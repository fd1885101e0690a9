mod change_password;
mod login;
mod refresh_token;
mod register_doctor;
mod register_patient;
mod send_verification_email;
mod verify_email;

use actix_web::web;
use change_password::change_password_controller;
use login::login_controller;
use medtrack_domain::{is_valid_email, normalize_email, PasswordError, PasswordHash};
use medtrack_infra::MedtrackContext;
use refresh_token::refresh_token_controller;
use register_doctor::register_doctor_controller;
use register_patient::register_patient_controller;
use send_verification_email::send_verification_email_controller;
use verify_email::verify_email_controller;

use crate::{error::MedtrackError, shared::auth::is_email_taken};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/auth/register-patient",
        web::post().to(register_patient_controller),
    );
    cfg.route(
        "/auth/register-doctor",
        web::post().to(register_doctor_controller),
    );
    cfg.route("/auth/login", web::post().to(login_controller));
    cfg.route("/auth/refresh", web::post().to(refresh_token_controller));
    cfg.route(
        "/auth/change-password/{user_id}",
        web::patch().to(change_password_controller),
    );
    cfg.route(
        "/auth/email-verification",
        web::post().to(send_verification_email_controller),
    );
    cfg.route(
        "/auth/email-verification/verify",
        web::post().to(verify_email_controller),
    );
}

#[derive(Debug, PartialEq)]
pub enum RegistrationError {
    InvalidEmail(String),
    EmptyPassword,
    EmailTaken(String),
    StorageError,
}

impl From<RegistrationError> for MedtrackError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::InvalidEmail(email) => {
                Self::BadClientData(format!("The email: {} is not valid", email))
            }
            RegistrationError::EmptyPassword => {
                Self::BadClientData("The password can not be empty".into())
            }
            RegistrationError::EmailTaken(email) => Self::Conflict(format!(
                "A user with the email: {} already exists",
                email
            )),
            RegistrationError::StorageError => Self::InternalError,
        }
    }
}

/// Normalized email and hashed password of a new user
async fn prepare_registration(
    email: &str,
    password: &str,
    ctx: &MedtrackContext,
) -> Result<(String, PasswordHash), RegistrationError> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(RegistrationError::InvalidEmail(email));
    }
    if is_email_taken(&email, ctx).await {
        return Err(RegistrationError::EmailTaken(email));
    }
    let password = PasswordHash::create(password).map_err(|e| match e {
        PasswordError::Empty => RegistrationError::EmptyPassword,
        PasswordError::MalformedHash => RegistrationError::StorageError,
    })?;

    Ok((email, password))
}
