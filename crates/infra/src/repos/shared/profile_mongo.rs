use medtrack_domain::Profile;
use serde::{Deserialize, Serialize};

/// Profile fields stored inline on the patient and doctor documents
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileMongo {
    first_name: Option<String>,
    last_name: Option<String>,
    mobile_number: Option<String>,
}

impl ProfileMongo {
    pub fn from_domain(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            mobile_number: profile.mobile_number.clone(),
        }
    }

    pub fn into_domain(self) -> Profile {
        Profile {
            first_name: self.first_name,
            last_name: self.last_name,
            mobile_number: self.mobile_number,
        }
    }
}
