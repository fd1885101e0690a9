mod inmemory;
mod mongo;

pub use inmemory::InMemoryMedicationRepo;
use medtrack_domain::{Medication, ID};
pub use mongo::MongoMedicationRepo;

#[async_trait::async_trait]
pub trait IMedicationRepo: Send + Sync {
    async fn insert(&self, medication: &Medication) -> anyhow::Result<()>;
    async fn save(&self, medication: &Medication) -> anyhow::Result<()>;
    async fn find(&self, medication_id: &ID) -> Option<Medication>;
    /// Every medication of the patient, newest first
    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>>;
    /// Medications of the patient that are not completed, newest first
    async fn find_active_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, MedtrackContext};
    use medtrack_domain::{Entity, Medication, ID};

    async fn create_contexts() -> Vec<MedtrackContext> {
        vec![
            MedtrackContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    fn medication(patient_id: &ID, created: i64) -> Medication {
        Medication {
            id: Default::default(),
            patient_id: patient_id.clone(),
            doctor_id: ID::new(),
            medication_name: "Paracetamol".into(),
            diagnosis: "Fever".into(),
            times_to_be_taken: 2,
            dosage: 1000.0,
            duration_in_hours: 72,
            is_completed: false,
            created,
        }
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let medication = medication(&ID::new(), 0);
            assert!(ctx.repos.medications.insert(&medication).await.is_ok());

            let res = ctx.repos.medications.find(&medication.id).await.unwrap();
            assert!(res.eq(&medication));
            assert_eq!(res.medication_name, "Paracetamol");
            assert_eq!(res.dosage, 1000.0);
            assert_eq!(res.duration_in_hours, 72);

            assert!(ctx.repos.medications.find(&ID::new()).await.is_none());
        }
    }

    #[tokio::test]
    async fn splits_current_and_history() {
        for ctx in create_contexts().await {
            let patient_id = ID::new();
            let older = medication(&patient_id, 10);
            let mut newer = medication(&patient_id, 20);
            let other_patient = medication(&ID::new(), 30);
            for m in [&older, &newer, &other_patient] {
                ctx.repos.medications.insert(m).await.unwrap();
            }

            let all = ctx
                .repos
                .medications
                .find_by_patient(&patient_id)
                .await
                .unwrap();
            assert_eq!(all.len(), 2);
            assert!(all[0].eq(&newer));
            assert!(all[1].eq(&older));

            newer.complete();
            ctx.repos.medications.save(&newer).await.unwrap();
            let active = ctx
                .repos
                .medications
                .find_active_by_patient(&patient_id)
                .await
                .unwrap();
            assert_eq!(active.len(), 1);
            assert!(active[0].eq(&older));
        }
    }
}
