use crate::{
    error::MedtrackError,
    shared::{
        auth::{find_user_account, protect_route},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::{send_verification_email::APIResponse, MessageResponse};
use medtrack_domain::{Otp, UserRole, ID};
use medtrack_infra::MedtrackContext;
use tracing::error;

pub async fn send_verification_email_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, _policy) = protect_route(&http_req, &ctx).await?;

    let usecase = SendVerificationEmailUseCase {
        user_id: user.id,
        role: user.role,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            let res: APIResponse = MessageResponse::new("Email verification otp sent");
            HttpResponse::Ok().json(res)
        })
        .map_err(MedtrackError::from)
}

/// Emails a new one time password to the user, replacing any pending one
#[derive(Debug)]
pub struct SendVerificationEmailUseCase {
    pub user_id: ID,
    pub role: UserRole,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    EmailNotSent,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User does not exist".into()),
            UseCaseError::EmailNotSent | UseCaseError::StorageError => Self::InternalError,
        }
    }
}

pub fn verification_email_text(code: &str) -> String {
    format!("Hi there, Here is your verification otp {}", code)
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendVerificationEmailUseCase {
    type Response = Otp;

    type Error = UseCaseError;

    const NAME: &'static str = "SendVerificationEmail";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let user = find_user_account(self.role, &self.user_id, ctx)
            .await
            .ok_or(UseCaseError::UserNotFound)?;

        ctx.repos
            .otps
            .delete_by_owner(user.id())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let otp = Otp::generate(user.id().clone(), ctx.sys.get_timestamp_millis());
        if let Err(e) = ctx
            .services
            .email
            .send(
                user.email(),
                "Verification Otp",
                &verification_email_text(&otp.code),
            )
            .await
        {
            error!("Unable to send verification email: {:?}", e);
            return Err(UseCaseError::EmailNotSent);
        }

        ctx.repos
            .otps
            .insert(&otp)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(otp)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{PasswordHash, Patient};
    use medtrack_infra::{InMemoryEmailService, Services};
    use std::sync::Arc;

    #[actix_web::test]
    async fn replaces_pending_otp_and_emails_it() {
        let mut ctx = MedtrackContext::create_inmemory();
        let email = Arc::new(InMemoryEmailService::new());
        ctx.services = Services {
            email: email.clone(),
            ..Services::create_inmemory()
        };

        let password = PasswordHash::from_stored("stored".into());
        let patient = Patient::new("ada@example.com".into(), password, 0);
        ctx.repos.patients.insert(&patient).await.unwrap();

        let mut usecase = SendVerificationEmailUseCase {
            user_id: patient.id.clone(),
            role: UserRole::Patient,
        };
        let first = usecase.execute(&ctx).await.unwrap();
        let second = usecase.execute(&ctx).await.unwrap();

        let pending = ctx.repos.otps.find_by_owner(&patient.id).await.unwrap();
        assert_eq!(pending.id, second.id);
        assert_ne!(pending.id, first.id);

        let sent = email.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, "ada@example.com");
        assert!(sent[1].text.contains(&second.code));
    }

    #[actix_web::test]
    async fn rejects_unknown_user() {
        let ctx = MedtrackContext::create_inmemory();
        let mut usecase = SendVerificationEmailUseCase {
            user_id: ID::new(),
            role: UserRole::Doctor,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::UserNotFound
        );
    }
}
