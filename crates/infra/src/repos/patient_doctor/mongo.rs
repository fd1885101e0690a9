use super::IPatientDoctorRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use medtrack_domain::{PatientDoctor, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoPatientDoctorRepo {
    collection: Collection<Document>,
}

impl MongoPatientDoctorRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("patient_doctors"),
        }
    }
}

#[async_trait::async_trait]
impl IPatientDoctorRepo for MongoPatientDoctorRepo {
    async fn insert(&self, relation: &PatientDoctor) -> anyhow::Result<()> {
        mongo_repo::insert::<_, PatientDoctorMongo>(&self.collection, relation).await
    }

    async fn find(&self, patient_id: &ID, doctor_id: &ID) -> Option<PatientDoctor> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref(),
            "doctor_id": doctor_id.inner_ref()
        };
        mongo_repo::find_one_by::<_, PatientDoctorMongo>(&self.collection, filter).await
    }

    async fn find_by_patient(&self, patient_id: &ID) -> anyhow::Result<Vec<PatientDoctor>> {
        let filter = doc! {
            "patient_id": patient_id.inner_ref()
        };
        let sort = doc! {
            "created_at": -1
        };
        mongo_repo::find_many_by_sorted::<_, PatientDoctorMongo>(
            &self.collection,
            filter,
            Some(sort),
        )
        .await
    }

    async fn find_by_doctor(&self, doctor_id: &ID) -> anyhow::Result<Vec<PatientDoctor>> {
        let filter = doc! {
            "doctor_id": doctor_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, PatientDoctorMongo>(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PatientDoctorMongo {
    _id: ObjectId,
    patient_id: ObjectId,
    doctor_id: ObjectId,
    created_at: DateTime,
}

impl MongoDocument<PatientDoctor> for PatientDoctorMongo {
    fn into_domain(self) -> PatientDoctor {
        PatientDoctor {
            id: ID::from(self._id),
            patient_id: ID::from(self.patient_id),
            doctor_id: ID::from(self.doctor_id),
            created: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(relation: &PatientDoctor) -> Self {
        Self {
            _id: *relation.id.inner_ref(),
            patient_id: *relation.patient_id.inner_ref(),
            doctor_id: *relation.doctor_id.inner_ref(),
            created_at: DateTime::from_millis(relation.created),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
