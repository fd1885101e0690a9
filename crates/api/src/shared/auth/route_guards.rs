use super::{find_user_account, tokens::decode_access_token, Policy};
use crate::error::MedtrackError;
use actix_web::HttpRequest;
use medtrack_domain::{UserRole, ID};
use medtrack_infra::MedtrackContext;

/// The user behind the access token of a request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: ID,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_patient(&self) -> bool {
        self.role == UserRole::Patient
    }

    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .trim()
        .trim_start_matches("Bearer")
        .trim_start_matches("bearer")
        .trim()
        .to_string()
}

async fn auth_user_req(req: &HttpRequest, ctx: &MedtrackContext) -> Option<AuthenticatedUser> {
    let token = req.headers().get("authorization")?;
    let token = parse_authtoken_header(token.to_str().ok()?);
    let claims = decode_access_token(&token, &ctx.config.jwt).ok()?;
    let user_id = claims.user_id().ok()?;

    // Tokens of deleted users are not accepted
    let user = find_user_account(claims.role, &user_id, ctx).await?;

    Some(AuthenticatedUser {
        id: user.id().clone(),
        email: user.email().to_string(),
        role: user.role(),
    })
}

/// Rejects requests without a valid access token in the `Authorization` header
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &MedtrackContext,
) -> Result<(AuthenticatedUser, Policy), MedtrackError> {
    match auth_user_req(req, ctx).await {
        Some(user) => {
            let policy = Policy::for_role(user.role);
            Ok((user, policy))
        }
        None => Err(MedtrackError::Unauthorized(
            "Unable to find user from credentials".into(),
        )),
    }
}
