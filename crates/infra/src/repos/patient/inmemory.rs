use super::IPatientRepo;
use crate::repos::shared::inmemory_repo::*;
use medtrack_domain::{Patient, ID};

pub struct InMemoryPatientRepo {
    patients: std::sync::Mutex<Vec<Patient>>,
}

impl InMemoryPatientRepo {
    pub fn new() -> Self {
        Self {
            patients: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPatientRepo for InMemoryPatientRepo {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()> {
        insert(patient, &self.patients);
        Ok(())
    }

    async fn save(&self, patient: &Patient) -> anyhow::Result<()> {
        save(patient, &self.patients);
        Ok(())
    }

    async fn find(&self, patient_id: &ID) -> Option<Patient> {
        find(patient_id, &self.patients)
    }

    async fn find_many(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Patient>> {
        Ok(find_by(&self.patients, |p| patient_ids.contains(&p.id)))
    }

    async fn find_by_email(&self, email: &str) -> Option<Patient> {
        find_by(&self.patients, |p| p.email == email).into_iter().next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Patient>> {
        Ok(find_by(&self.patients, |_| true))
    }
}
