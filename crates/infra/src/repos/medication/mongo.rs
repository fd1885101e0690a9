use super::IMedicationRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use medtrack_domain::{Medication, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoMedicationRepo {
    collection: Collection<Document>,
}

impl MongoMedicationRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("medications"),
        }
    }
}

fn newest_first() -> Option<Document> {
    Some(doc! {
        "created_at": -1
    })
}

#[async_trait::async_trait]
impl IMedicationRepo for MongoMedicationRepo {
    async fn insert(&self, medication: &Medication) -> anyhow::Result<()> {
        mongo_repo::insert::<_, MedicationMongo>(&self.collection, medication).await
    }

    async fn save(&self, medication: &Medication) -> anyhow::Result<()> {
        mongo_repo::save::<_, MedicationMongo>(&self.collection, medication).await
    }

    async fn find(&self, medication_id: &ID) -> Option<Medication> {
        mongo_repo::find::<_, MedicationMongo>(&self.collection, medication_id.inner_ref()).await
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref()
        };
        mongo_repo::find_many_by_sorted::<_, MedicationMongo>(
            &self.collection,
            filter,
            newest_first(),
        )
        .await
    }

    async fn find_active_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<Medication>> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref(),
            "is_completed": false
        };
        mongo_repo::find_many_by_sorted::<_, MedicationMongo>(
            &self.collection,
            filter,
            newest_first(),
        )
        .await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct MedicationMongo {
    _id: ObjectId,
    patient_id: ObjectId,
    doctor_id: ObjectId,
    medication_name: String,
    diagnosis: String,
    times_to_be_taken: i64,
    dosage: f64,
    duration_in_hours: i64,
    is_completed: bool,
    created_at: DateTime,
}

impl MongoDocument<Medication> for MedicationMongo {
    fn into_domain(self) -> Medication {
        Medication {
            id: ID::from(self._id),
            patient_id: ID::from(self.patient_id),
            doctor_id: ID::from(self.doctor_id),
            medication_name: self.medication_name,
            diagnosis: self.diagnosis,
            times_to_be_taken: self.times_to_be_taken,
            dosage: self.dosage,
            duration_in_hours: self.duration_in_hours,
            is_completed: self.is_completed,
            created: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(medication: &Medication) -> Self {
        Self {
            _id: *medication.id.inner_ref(),
            patient_id: *medication.patient_id.inner_ref(),
            doctor_id: *medication.doctor_id.inner_ref(),
            medication_name: medication.medication_name.clone(),
            diagnosis: medication.diagnosis.clone(),
            times_to_be_taken: medication.times_to_be_taken,
            dosage: medication.dosage,
            duration_in_hours: medication.duration_in_hours,
            is_completed: medication.is_completed,
            created_at: DateTime::from_millis(medication.created),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
