use crate::shared::entity::{Entity, ID};
use medtrack_utils::create_otp_code;
use subtle::ConstantTimeEq;

pub const OTP_LEN: usize = 6;

/// One time password emailed to a `Patient` or `Doctor` to verify their email.
/// A user has at most one pending `Otp`.
#[derive(Debug, Clone)]
pub struct Otp {
    pub id: ID,
    /// Id of the `Patient` or `Doctor` this code was sent to
    pub owner_id: ID,
    pub code: String,
    pub created: i64,
}

impl Otp {
    pub fn generate(owner_id: ID, created: i64) -> Self {
        Self {
            id: Default::default(),
            owner_id,
            code: create_otp_code(OTP_LEN),
            created,
        }
    }

    pub fn matches(&self, code: &str) -> bool {
        bool::from(self.code.as_bytes().ct_eq(code.trim().as_bytes()))
    }
}

impl Entity for Otp {
    fn id(&self) -> &ID {
        &self.id
    }
}
