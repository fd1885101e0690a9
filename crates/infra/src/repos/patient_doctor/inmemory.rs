use super::IPatientDoctorRepo;
use crate::repos::shared::inmemory_repo::*;
use medtrack_domain::{PatientDoctor, ID};

pub struct InMemoryPatientDoctorRepo {
    relations: std::sync::Mutex<Vec<PatientDoctor>>,
}

impl InMemoryPatientDoctorRepo {
    pub fn new() -> Self {
        Self {
            relations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPatientDoctorRepo for InMemoryPatientDoctorRepo {
    async fn insert(&self, relation: &PatientDoctor) -> anyhow::Result<()> {
        insert(relation, &self.relations);
        Ok(())
    }

    async fn find(&self, patient_id: &ID, doctor_id: &ID) -> Option<PatientDoctor> {
        find_by(&self.relations, |r| {
            &r.patient_id == patient_id && &r.doctor_id == doctor_id
        })
        .into_iter()
        .next()
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<PatientDoctor>> {
        let mut relations = find_by(&self.relations, |r| &r.patient_id == patient_id);
        relations.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(relations)
    }

    async fn find_by_doctor(&self, doctor_id: &ID) -> anyhow::Result<Vec<PatientDoctor>> {
        Ok(find_by(&self.relations, |r| &r.doctor_id == doctor_id))
    }
}
