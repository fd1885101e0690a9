use crate::{
    password::PasswordHash,
    profile::Profile,
    shared::entity::{Entity, ID},
};

#[derive(Debug, Clone)]
pub struct Doctor {
    pub id: ID,
    pub email: String,
    pub is_email_verified: bool,
    pub password: PasswordHash,
    pub profile: Profile,
    pub refresh_token: Option<String>,
    pub created: i64,
}

impl Doctor {
    pub fn new(email: String, password: PasswordHash, created: i64) -> Self {
        Self {
            id: Default::default(),
            email,
            is_email_verified: false,
            password,
            profile: Default::default(),
            refresh_token: None,
            created,
        }
    }
}

impl Entity for Doctor {
    fn id(&self) -> &ID {
        &self.id
    }
}
