use crate::{
    error::MedtrackError,
    shared::{
        auth::{find_user_account, protect_route, save_user_account},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::{
    change_password::{APIResponse, PathParams, RequestBody},
    MessageResponse,
};
use medtrack_domain::{PasswordError, PasswordHash, UserRole, ID};
use medtrack_infra::MedtrackContext;
use std::fmt;

pub async fn change_password_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, _policy) = protect_route(&http_req, &ctx).await?;
    if user.id != path_params.user_id {
        return Err(MedtrackError::Forbidden(
            "Users can only change their own password".into(),
        ));
    }

    let body = body.0;
    let usecase = ChangePasswordUseCase {
        user_id: user.id,
        role: user.role,
        old_password: body.old_password,
        new_password: body.new_password,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            let res: APIResponse = MessageResponse::new("Password changed successfully");
            HttpResponse::Ok().json(res)
        })
        .map_err(MedtrackError::from)
}

pub struct ChangePasswordUseCase {
    pub user_id: ID,
    pub role: UserRole,
    pub old_password: String,
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordUseCase")
            .field("user_id", &self.user_id)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    IncorrectPassword,
    EmptyPassword,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User does not exist".into()),
            UseCaseError::IncorrectPassword => Self::Unauthorized("Incorrect password".into()),
            UseCaseError::EmptyPassword => {
                Self::BadClientData("The new password can not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ChangePasswordUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ChangePassword";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut user = find_user_account(self.role, &self.user_id, ctx)
            .await
            .ok_or(UseCaseError::UserNotFound)?;

        match user.password().verify(&self.old_password) {
            Ok(true) => (),
            Ok(false) => return Err(UseCaseError::IncorrectPassword),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        let password = PasswordHash::create(&self.new_password).map_err(|e| match e {
            PasswordError::Empty => UseCaseError::EmptyPassword,
            PasswordError::MalformedHash => UseCaseError::StorageError,
        })?;
        user.set_password(password);

        save_user_account(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::Doctor;

    #[actix_web::test]
    async fn changes_password_after_checking_the_old_one() {
        let ctx = MedtrackContext::create_inmemory();
        let password = PasswordHash::create("old-password").unwrap();
        let doctor = Doctor::new("doc@clinic.org".into(), password, 0);
        ctx.repos.doctors.insert(&doctor).await.unwrap();

        let mut usecase = ChangePasswordUseCase {
            user_id: doctor.id.clone(),
            role: UserRole::Doctor,
            old_password: "wrong".into(),
            new_password: "new-password".into(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::IncorrectPassword
        );

        usecase.old_password = "old-password".into();
        assert!(usecase.execute(&ctx).await.is_ok());
        let stored = ctx.repos.doctors.find(&doctor.id).await.unwrap();
        assert!(stored.password.verify("new-password").unwrap());
        assert!(!stored.password.verify("old-password").unwrap());
    }
}
