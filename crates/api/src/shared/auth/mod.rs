mod policy;
mod route_guards;
mod tokens;

pub use policy::{Permission, Policy};
pub use route_guards::{protect_route, AuthenticatedUser};
pub use tokens::{create_token_pair, decode_refresh_token, TokenPair};

use medtrack_domain::{UserAccount, UserRole, ID};
use medtrack_infra::MedtrackContext;

/// Looks up the `Patient` or `Doctor` with the given role and id
pub async fn find_user_account(
    role: UserRole,
    user_id: &ID,
    ctx: &MedtrackContext,
) -> Option<UserAccount> {
    match role {
        UserRole::Patient => ctx
            .repos
            .patients
            .find(user_id)
            .await
            .map(UserAccount::Patient),
        UserRole::Doctor => ctx
            .repos
            .doctors
            .find(user_id)
            .await
            .map(UserAccount::Doctor),
    }
}

/// Patients are looked up before doctors
pub async fn find_user_account_by_email(
    email: &str,
    ctx: &MedtrackContext,
) -> Option<UserAccount> {
    if let Some(patient) = ctx.repos.patients.find_by_email(email).await {
        return Some(UserAccount::Patient(patient));
    }
    ctx.repos
        .doctors
        .find_by_email(email)
        .await
        .map(UserAccount::Doctor)
}

pub async fn save_user_account(user: &UserAccount, ctx: &MedtrackContext) -> anyhow::Result<()> {
    match user {
        UserAccount::Patient(patient) => ctx.repos.patients.save(patient).await,
        UserAccount::Doctor(doctor) => ctx.repos.doctors.save(doctor).await,
    }
}

/// An email can only belong to one user, no matter the role
pub async fn is_email_taken(email: &str, ctx: &MedtrackContext) -> bool {
    find_user_account_by_email(email, ctx).await.is_some()
}
