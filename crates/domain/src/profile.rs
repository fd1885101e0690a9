use crate::mobile_number::{parse_mobile_number, MobileNumberError};

/// Fields a `Patient` or `Doctor` can change on their own profile.
/// `None` leaves the current value untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
}

/// Names and contact number shared by patients and doctors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), MobileNumberError> {
        // Parse first so that a bad number leaves the profile unchanged
        let mobile_number = match update.mobile_number {
            Some(number) => Some(parse_mobile_number(&number)?),
            None => None,
        };
        if let Some(first_name) = update.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            self.last_name = Some(last_name);
        }
        if mobile_number.is_some() {
            self.mobile_number = mobile_number;
        }
        Ok(())
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
