mod inmemory;
mod mongo;

pub use inmemory::InMemoryPatientRepo;
use medtrack_domain::{Patient, ID};
pub use mongo::MongoPatientRepo;

#[async_trait::async_trait]
pub trait IPatientRepo: Send + Sync {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()>;
    async fn save(&self, patient: &Patient) -> anyhow::Result<()>;
    async fn find(&self, patient_id: &ID) -> Option<Patient>;
    async fn find_many(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Patient>>;
    async fn find_by_email(&self, email: &str) -> Option<Patient>;
    async fn find_all(&self) -> anyhow::Result<Vec<Patient>>;
}
