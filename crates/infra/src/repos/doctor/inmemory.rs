use super::IDoctorRepo;
use crate::repos::shared::inmemory_repo::*;
use medtrack_domain::{Doctor, ID};

pub struct InMemoryDoctorRepo {
    doctors: std::sync::Mutex<Vec<Doctor>>,
}

impl InMemoryDoctorRepo {
    pub fn new() -> Self {
        Self {
            doctors: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IDoctorRepo for InMemoryDoctorRepo {
    async fn insert(&self, doctor: &Doctor) -> anyhow::Result<()> {
        insert(doctor, &self.doctors);
        Ok(())
    }

    async fn save(&self, doctor: &Doctor) -> anyhow::Result<()> {
        save(doctor, &self.doctors);
        Ok(())
    }

    async fn find(&self, doctor_id: &ID) -> Option<Doctor> {
        find(doctor_id, &self.doctors)
    }

    async fn find_by_email(&self, email: &str) -> Option<Doctor> {
        find_by(&self.doctors, |d| d.email == email).into_iter().next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Doctor>> {
        Ok(find_by(&self.doctors, |_| true))
    }
}
