use medtrack_domain::UserRole;
use serde::{Deserialize, Serialize};

/// A Policy decides which actions a user can and cannot take.
///
/// Every `UseCase` contains a list of `Permission`s that is required
/// for a user to execute it, if the user's `Policy` does not authorize
/// some of these `Permission`s the request will be rejected.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Policy {
    /// `Permission`s allowed by the `Policy`
    allow: Option<Vec<Permission>>,
    /// `Permission`s rejected by the `Policy`
    reject: Option<Vec<Permission>>,
}

impl Policy {
    /// The `Policy` every user with the given role gets
    pub fn for_role(role: UserRole) -> Self {
        use Permission::*;

        let allow = match role {
            UserRole::Patient => vec![
                ReadProfiles,
                ReadOwnPatientProfile,
                UpdatePatientProfile,
                ReadCurrentDoctor,
                ReadOwnMedications,
                ReadMedication,
                CompleteMedication,
                ReadReminder,
                CreateReminder,
                UpdateReminder,
                DeleteReminder,
                TakeReminder,
            ],
            UserRole::Doctor => vec![
                ReadProfiles,
                UpdateDoctorProfile,
                PrescribeMedication,
                UpdateMedication,
                ReadMedication,
                ReadReminder,
                CreateReminder,
                UpdateReminder,
                DeleteReminder,
            ],
        };
        Self {
            allow: Some(allow),
            reject: None,
        }
    }

    /// Checks if this `Policy` has the right to list of `Permission`s
    pub fn authorize(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }

        if let Some(rejected) = &self.reject {
            for rejected_permission in rejected {
                if *rejected_permission == Permission::All {
                    return false;
                }
                if permissions.contains(rejected_permission) {
                    return false;
                }
            }
        }

        if let Some(allowed) = &self.allow {
            if allowed.contains(&Permission::All) {
                return true;
            }

            return permissions
                .iter()
                .all(|permission| allowed.contains(permission));
        }

        false
    }
}

/// `Permission` are different kind of actions that can be performed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub enum Permission {
    #[serde(rename = "*")]
    All,
    ReadProfiles,
    ReadOwnPatientProfile,
    UpdatePatientProfile,
    UpdateDoctorProfile,
    ReadCurrentDoctor,
    PrescribeMedication,
    UpdateMedication,
    ReadOwnMedications,
    ReadMedication,
    CompleteMedication,
    ReadReminder,
    CreateReminder,
    UpdateReminder,
    DeleteReminder,
    TakeReminder,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn permissions() {
        let policy = Policy::default();
        assert!(policy.authorize(&[]));
        assert!(!policy.authorize(&[Permission::ReadProfiles]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: None,
        };
        assert!(policy.authorize(&[Permission::PrescribeMedication]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: Some(vec![Permission::PrescribeMedication]),
        };
        assert!(!policy.authorize(&[Permission::PrescribeMedication]));

        let policy = Policy {
            allow: Some(vec![Permission::ReadProfiles]),
            reject: Some(vec![Permission::All]),
        };
        assert!(!policy.authorize(&[Permission::ReadProfiles]));

        let policy = Policy {
            allow: Some(vec![Permission::ReadProfiles, Permission::UpdateDoctorProfile]),
            reject: Some(vec![Permission::UpdateDoctorProfile]),
        };
        assert!(policy.authorize(&[Permission::ReadProfiles]));
        assert!(!policy.authorize(&[Permission::ReadProfiles, Permission::UpdateDoctorProfile]));
    }

    #[test]
    fn role_policies() {
        let patient = Policy::for_role(UserRole::Patient);
        assert!(patient.authorize(&[Permission::TakeReminder, Permission::CompleteMedication]));
        assert!(!patient.authorize(&[Permission::PrescribeMedication]));
        assert!(!patient.authorize(&[Permission::UpdateMedication]));
        assert!(!patient.authorize(&[Permission::UpdateDoctorProfile]));

        let doctor = Policy::for_role(UserRole::Doctor);
        assert!(doctor.authorize(&[Permission::PrescribeMedication]));
        assert!(doctor.authorize(&[Permission::CreateReminder]));
        assert!(!doctor.authorize(&[Permission::TakeReminder]));
        assert!(!doctor.authorize(&[Permission::ReadCurrentDoctor]));
        assert!(!doctor.authorize(&[Permission::ReadOwnMedications]));
        assert!(!doctor.authorize(&[Permission::UpdatePatientProfile]));
    }
}
