use base64::{engine::general_purpose::STANDARD, Engine};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

pub const PBKDF2_ITERATIONS: u32 = 100_000;
const HASH_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;
const SCHEME: &str = "pbkdf2-sha256";

/// Salted PBKDF2-SHA256 hash of a user password.
///
/// Stored as `pbkdf2-sha256$<iterations>$<salt b64>$<hash b64>` so that the
/// iteration count can be raised later without invalidating old hashes.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password can not be empty")]
    Empty,
    #[error("Stored password hash is malformed")]
    MalformedHash,
}

impl PasswordHash {
    pub fn create(password: &str) -> Result<Self, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::Empty);
        }
        let mut salt = [0u8; SALT_LENGTH];
        rand::thread_rng().fill_bytes(&mut salt);

        Ok(Self::with_params(password, &salt, PBKDF2_ITERATIONS))
    }

    fn with_params(password: &str, salt: &[u8], iterations: u32) -> Self {
        let mut hash = [0u8; HASH_LENGTH];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut hash);

        Self(format!(
            "{}${}${}${}",
            SCHEME,
            iterations,
            STANDARD.encode(salt),
            STANDARD.encode(hash)
        ))
    }

    /// Wraps a hash read back from storage
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, password: &str) -> Result<bool, PasswordError> {
        let parts = self.0.split('$').collect::<Vec<_>>();
        if parts.len() != 4 || parts[0] != SCHEME {
            return Err(PasswordError::MalformedHash);
        }
        let iterations = parts[1]
            .parse::<u32>()
            .map_err(|_| PasswordError::MalformedHash)?;
        let salt = STANDARD
            .decode(parts[2])
            .map_err(|_| PasswordError::MalformedHash)?;
        let expected = STANDARD
            .decode(parts[3])
            .map_err(|_| PasswordError::MalformedHash)?;
        if expected.len() != HASH_LENGTH {
            return Err(PasswordError::MalformedHash);
        }

        let mut actual = [0u8; HASH_LENGTH];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut actual);

        Ok(bool::from(actual.as_slice().ct_eq(expected.as_slice())))
    }
}
