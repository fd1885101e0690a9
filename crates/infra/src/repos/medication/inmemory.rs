use super::IMedicationRepo;
use crate::repos::shared::inmemory_repo::*;
use medtrack_domain::{Medication, ID};

pub struct InMemoryMedicationRepo {
    medications: std::sync::Mutex<Vec<Medication>>,
}

impl InMemoryMedicationRepo {
    pub fn new() -> Self {
        Self {
            medications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

fn newest_first(mut medications: Vec<Medication>) -> Vec<Medication> {
    medications.sort_by(|a, b| b.created.cmp(&a.created));
    medications
}

#[async_trait::async_trait]
impl IMedicationRepo for InMemoryMedicationRepo {
    async fn insert(&self, medication: &Medication) -> anyhow::Result<()> {
        insert(medication, &self.medications);
        Ok(())
    }

    async fn save(&self, medication: &Medication) -> anyhow::Result<()> {
        save(medication, &self.medications);
        Ok(())
    }

    async fn find(&self, medication_id: &ID) -> Option<Medication> {
        find(medication_id, &self.medications)
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>> {
        let medications = find_by(&self.medications, |m| &m.patient_id == patient_id);
        Ok(newest_first(medications))
    }

    async fn find_active_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>> {
        let medications = find_by(&self.medications, |m| {
            &m.patient_id == patient_id && !m.is_completed
        });
        Ok(newest_first(medications))
    }
}
