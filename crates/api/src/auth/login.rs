use crate::{
    error::MedtrackError,
    shared::{
        auth::{create_token_pair, find_user_account_by_email, save_user_account, TokenPair},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use medtrack_api_structs::login::{APIResponse, RequestBody};
use medtrack_domain::{normalize_email, UserAccount};
use medtrack_infra::MedtrackContext;
use std::fmt;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let body = body.0;
    let usecase = LoginUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|(user, tokens)| {
            HttpResponse::Ok().json(APIResponse {
                user_id: user.id().clone(),
                role: user.role(),
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            })
        })
        .map_err(MedtrackError::from)
}

pub struct LoginUseCase {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginUseCase")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    IncorrectPassword,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User does not exist".into()),
            UseCaseError::IncorrectPassword => Self::Unauthorized("Incorrect password".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = (UserAccount, TokenPair);

    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let email = normalize_email(&self.email);
        let mut user = find_user_account_by_email(&email, ctx)
            .await
            .ok_or(UseCaseError::UserNotFound)?;

        match user.password().verify(&self.password) {
            Ok(true) => (),
            Ok(false) => return Err(UseCaseError::IncorrectPassword),
            Err(_) => return Err(UseCaseError::StorageError),
        }

        let tokens = create_token_pair(&user, &ctx.config.jwt, ctx.sys.get_timestamp_millis())
            .map_err(|_| UseCaseError::StorageError)?;
        user.set_refresh_token(tokens.refresh_token.clone());
        save_user_account(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok((user, tokens))
    }
}
