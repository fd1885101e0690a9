mod inmemory;
mod mongo;

pub use inmemory::InMemoryDoctorRepo;
use medtrack_domain::{Doctor, ID};
pub use mongo::MongoDoctorRepo;

#[async_trait::async_trait]
pub trait IDoctorRepo: Send + Sync {
    async fn insert(&self, doctor: &Doctor) -> anyhow::Result<()>;
    async fn save(&self, doctor: &Doctor) -> anyhow::Result<()>;
    async fn find(&self, doctor_id: &ID) -> Option<Doctor>;
    async fn find_by_email(&self, email: &str) -> Option<Doctor>;
    async fn find_all(&self) -> anyhow::Result<Vec<Doctor>>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, MedtrackContext};
    use medtrack_domain::{Doctor, Entity, PasswordHash, ID};

    async fn create_contexts() -> Vec<MedtrackContext> {
        vec![
            MedtrackContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let password = PasswordHash::from_stored("pbkdf2-sha256$1$AA==$AA==".into());
            let mut doctor = Doctor::new(format!("{}@clinic.org", ID::new()), password, 10);
            assert!(ctx.repos.doctors.insert(&doctor).await.is_ok());

            let res = ctx.repos.doctors.find(&doctor.id).await.unwrap();
            assert!(res.eq(&doctor));
            assert_eq!(res.created, 10);

            doctor.refresh_token = Some("token".into());
            doctor.profile.last_name = Some("Okafor".into());
            assert!(ctx.repos.doctors.save(&doctor).await.is_ok());

            let res = ctx
                .repos
                .doctors
                .find_by_email(&doctor.email)
                .await
                .unwrap();
            assert_eq!(res.refresh_token.as_deref(), Some("token"));
            assert_eq!(res.profile.last_name.as_deref(), Some("Okafor"));

            let all = ctx.repos.doctors.find_all().await.unwrap();
            assert!(all.iter().any(|d| d.id == doctor.id));
        }
    }
}
