use crate::{
    password::PasswordHash,
    profile::Profile,
    shared::entity::{Entity, ID},
};

#[derive(Debug, Clone)]
pub struct Patient {
    pub id: ID,
    pub email: String,
    pub is_email_verified: bool,
    pub password: PasswordHash,
    pub profile: Profile,
    /// Refresh token handed out at the last login
    pub refresh_token: Option<String>,
    /// Timestamp in millis
    pub date_of_birth: Option<i64>,
    pub created: i64,
}

impl Patient {
    pub fn new(email: String, password: PasswordHash, created: i64) -> Self {
        Self {
            id: Default::default(),
            email,
            is_email_verified: false,
            password,
            profile: Default::default(),
            refresh_token: None,
            date_of_birth: None,
            created,
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> &ID {
        &self.id
    }
}
