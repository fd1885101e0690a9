use crate::{
    doctor::Doctor, password::PasswordHash, patient::Patient, role::UserRole, shared::entity::ID,
};

/// Either kind of user that can log in
#[derive(Debug, Clone)]
pub enum UserAccount {
    Patient(Patient),
    Doctor(Doctor),
}

impl UserAccount {
    pub fn id(&self) -> &ID {
        match self {
            Self::Patient(p) => &p.id,
            Self::Doctor(d) => &d.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Patient(p) => &p.email,
            Self::Doctor(d) => &d.email,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Self::Patient(_) => UserRole::Patient,
            Self::Doctor(_) => UserRole::Doctor,
        }
    }

    pub fn password(&self) -> &PasswordHash {
        match self {
            Self::Patient(p) => &p.password,
            Self::Doctor(d) => &d.password,
        }
    }

    pub fn set_password(&mut self, password: PasswordHash) {
        match self {
            Self::Patient(p) => p.password = password,
            Self::Doctor(d) => d.password = password,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        match self {
            Self::Patient(p) => p.refresh_token.as_deref(),
            Self::Doctor(d) => d.refresh_token.as_deref(),
        }
    }

    pub fn set_refresh_token(&mut self, token: String) {
        match self {
            Self::Patient(p) => p.refresh_token = Some(token),
            Self::Doctor(d) => d.refresh_token = Some(token),
        }
    }

    pub fn is_email_verified(&self) -> bool {
        match self {
            Self::Patient(p) => p.is_email_verified,
            Self::Doctor(d) => d.is_email_verified,
        }
    }

    pub fn verify_email(&mut self) {
        match self {
            Self::Patient(p) => p.is_email_verified = true,
            Self::Doctor(d) => d.is_email_verified = true,
        }
    }
}
