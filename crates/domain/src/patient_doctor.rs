use crate::shared::entity::{Entity, ID};

/// A `Doctor` treating a `Patient`. The most recently created relation
/// of a `Patient` points to their current `Doctor`.
#[derive(Debug, Clone)]
pub struct PatientDoctor {
    pub id: ID,
    pub patient_id: ID,
    pub doctor_id: ID,
    pub created: i64,
}

impl PatientDoctor {
    pub fn new(patient_id: ID, doctor_id: ID, created: i64) -> Self {
        Self {
            id: Default::default(),
            patient_id,
            doctor_id,
            created,
        }
    }
}

impl Entity for PatientDoctor {
    fn id(&self) -> &ID {
        &self.id
    }
}
