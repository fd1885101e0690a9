use crate::{
    error::MedtrackError,
    shared::{
        auth::{find_user_account, protect_route, save_user_account},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::{
    verify_email::{APIResponse, RequestBody},
    MessageResponse,
};
use medtrack_domain::{UserRole, ID};
use medtrack_infra::MedtrackContext;

pub async fn verify_email_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, _policy) = protect_route(&http_req, &ctx).await?;

    let usecase = VerifyEmailUseCase {
        user_id: user.id,
        role: user.role,
        otp: body.0.otp,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            let res: APIResponse = MessageResponse::new("Email successfully verified");
            HttpResponse::Ok().json(res)
        })
        .map_err(MedtrackError::from)
}

#[derive(Debug)]
pub struct VerifyEmailUseCase {
    pub user_id: ID,
    pub role: UserRole,
    pub otp: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    NoPendingOtp,
    IncorrectOtp,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User does not exist".into()),
            UseCaseError::NoPendingOtp => Self::BadClientData(
                "There is no pending otp, request a new verification email".into(),
            ),
            UseCaseError::IncorrectOtp => Self::Unauthorized("Incorrect otp".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for VerifyEmailUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "VerifyEmail";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut user = find_user_account(self.role, &self.user_id, ctx)
            .await
            .ok_or(UseCaseError::UserNotFound)?;

        let otp = ctx
            .repos
            .otps
            .find_by_owner(user.id())
            .await
            .ok_or(UseCaseError::NoPendingOtp)?;
        if !otp.matches(&self.otp) {
            return Err(UseCaseError::IncorrectOtp);
        }

        user.verify_email();
        save_user_account(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        ctx.repos.otps.delete(&otp.id).await;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{Otp, PasswordHash, Patient};

    #[actix_web::test]
    async fn verifies_email_with_pending_otp() {
        let ctx = MedtrackContext::create_inmemory();
        let password = PasswordHash::from_stored("stored".into());
        let patient = Patient::new("ada@example.com".into(), password, 0);
        ctx.repos.patients.insert(&patient).await.unwrap();

        let mut usecase = VerifyEmailUseCase {
            user_id: patient.id.clone(),
            role: UserRole::Patient,
            otp: "123456".into(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NoPendingOtp
        );

        let otp = Otp::generate(patient.id.clone(), 0);
        ctx.repos.otps.insert(&otp).await.unwrap();

        usecase.otp = if otp.code == "000000" {
            "111111".into()
        } else {
            "000000".into()
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::IncorrectOtp
        );

        usecase.otp = otp.code.clone();
        assert!(usecase.execute(&ctx).await.is_ok());
        let stored = ctx.repos.patients.find(&patient.id).await.unwrap();
        assert!(stored.is_email_verified);
        assert!(ctx.repos.otps.find_by_owner(&patient.id).await.is_none());
    }
}
