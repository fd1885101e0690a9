mod inmemory;
mod mongo;

pub use inmemory::InMemoryPatientDoctorRepo;
use medtrack_domain::{PatientDoctor, ID};
pub use mongo::MongoPatientDoctorRepo;

#[async_trait::async_trait]
pub trait IPatientDoctorRepo: Send + Sync {
    async fn insert(&self, relation: &PatientDoctor) -> anyhow::Result<()>;
    async fn find(&self, patient_id: &ID, doctor_id: &ID) -> Option<PatientDoctor>;
    /// Newest first, so the first element is the current doctor
    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<PatientDoctor>>;
    async fn find_by_doctor(&self, doctor_id: &ID) -> anyhow::Result<Vec<PatientDoctor>>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, MedtrackContext};
    use medtrack_domain::{Entity, PatientDoctor, ID};

    async fn create_contexts() -> Vec<MedtrackContext> {
        vec![
            MedtrackContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    #[tokio::test]
    async fn latest_relation_is_current_doctor() {
        for ctx in create_contexts().await {
            let patient_id = ID::new();
            let first_doctor = ID::new();
            let second_doctor = ID::new();
            let first = PatientDoctor::new(patient_id.clone(), first_doctor.clone(), 10);
            let second = PatientDoctor::new(patient_id.clone(), second_doctor.clone(), 20);
            ctx.repos.patient_doctors.insert(&first).await.unwrap();
            ctx.repos.patient_doctors.insert(&second).await.unwrap();

            let relations = ctx
                .repos
                .patient_doctors
                .find_by_patient(&patient_id)
                .await
                .unwrap();
            assert_eq!(relations.len(), 2);
            assert!(relations[0].eq(&second));

            let res = ctx
                .repos
                .patient_doctors
                .find(&patient_id, &first_doctor)
                .await
                .unwrap();
            assert!(res.eq(&first));
            assert!(ctx
                .repos
                .patient_doctors
                .find(&ID::new(), &first_doctor)
                .await
                .is_none());

            let by_doctor = ctx
                .repos
                .patient_doctors
                .find_by_doctor(&second_doctor)
                .await
                .unwrap();
            assert_eq!(by_doctor.len(), 1);
            assert_eq!(by_doctor[0].patient_id, patient_id);
        }
    }
}
