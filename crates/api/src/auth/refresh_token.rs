use crate::{
    error::MedtrackError,
    shared::{
        auth::{
            create_token_pair, decode_refresh_token, find_user_account, save_user_account,
            TokenPair,
        },
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use medtrack_api_structs::refresh_token::{APIResponse, RequestBody};
use medtrack_infra::MedtrackContext;

pub async fn refresh_token_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let usecase = RefreshTokenUseCase {
        refresh_token: body.0.refresh_token,
    };

    execute(usecase, &ctx)
        .await
        .map(|tokens| {
            HttpResponse::Ok().json(APIResponse {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            })
        })
        .map_err(MedtrackError::from)
}

/// Trades the refresh token handed out at the last login for a new token pair
#[derive(Debug)]
pub struct RefreshTokenUseCase {
    pub refresh_token: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidToken,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidToken => {
                Self::Unauthorized("The refresh token is not valid".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RefreshTokenUseCase {
    type Response = TokenPair;

    type Error = UseCaseError;

    const NAME: &'static str = "RefreshToken";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let claims = decode_refresh_token(&self.refresh_token, &ctx.config.jwt)
            .map_err(|_| UseCaseError::InvalidToken)?;
        let user_id = claims.user_id().map_err(|_| UseCaseError::InvalidToken)?;
        let mut user = find_user_account(claims.role, &user_id, ctx)
            .await
            .ok_or(UseCaseError::InvalidToken)?;

        // Only the latest refresh token can be used
        if user.refresh_token() != Some(self.refresh_token.as_str()) {
            return Err(UseCaseError::InvalidToken);
        }

        let tokens = create_token_pair(&user, &ctx.config.jwt, ctx.sys.get_timestamp_millis())
            .map_err(|_| UseCaseError::StorageError)?;
        user.set_refresh_token(tokens.refresh_token.clone());
        save_user_account(&user, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(tokens)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{PasswordHash, Patient, UserAccount};

    #[actix_web::test]
    async fn only_accepts_the_stored_refresh_token() {
        let ctx = MedtrackContext::create_inmemory();
        let password = PasswordHash::from_stored("stored".into());
        let mut patient = Patient::new("ada@example.com".into(), password, 0);
        let user = UserAccount::Patient(patient.clone());
        let tokens =
            create_token_pair(&user, &ctx.config.jwt, ctx.sys.get_timestamp_millis()).unwrap();
        patient.refresh_token = Some(tokens.refresh_token.clone());
        ctx.repos.patients.insert(&patient).await.unwrap();

        let mut usecase = RefreshTokenUseCase {
            refresh_token: tokens.access_token.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidToken
        );

        let mut usecase = RefreshTokenUseCase {
            refresh_token: tokens.refresh_token.clone(),
        };
        let new_tokens = usecase.execute(&ctx).await.unwrap();
        let stored = ctx.repos.patients.find(&patient.id).await.unwrap();
        assert_eq!(stored.refresh_token, Some(new_tokens.refresh_token));
    }
}
