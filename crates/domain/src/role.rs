use serde::{Deserialize, Serialize};

/// The two kinds of users that can authenticate against the api
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
}
