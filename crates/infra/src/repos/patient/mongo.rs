use super::IPatientRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::profile_mongo::ProfileMongo;
use medtrack_domain::{PasswordHash, Patient, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoPatientRepo {
    collection: Collection<Document>,
}

impl MongoPatientRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("patients"),
        }
    }
}

#[async_trait::async_trait]
impl IPatientRepo for MongoPatientRepo {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()> {
        mongo_repo::insert::<_, PatientMongo>(&self.collection, patient).await
    }

    async fn save(&self, patient: &Patient) -> anyhow::Result<()> {
        mongo_repo::save::<_, PatientMongo>(&self.collection, patient).await
    }

    async fn find(&self, patient_id: &ID) -> Option<Patient> {
        mongo_repo::find::<_, PatientMongo>(&self.collection, patient_id.inner_ref()).await
    }

    async fn find_many(&self, patient_ids: &[ID]) -> anyhow::Result<Vec<Patient>> {
        let filter = doc! {
            "_id": {
                "$in": patient_ids.iter().map(|id| id.inner_ref()).collect::<Vec<_>>()
            }
        };
        mongo_repo::find_many_by::<_, PatientMongo>(&self.collection, filter).await
    }

    async fn find_by_email(&self, email: &str) -> Option<Patient> {
        let filter = doc! {
            "email": email
        };
        mongo_repo::find_one_by::<_, PatientMongo>(&self.collection, filter).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Patient>> {
        mongo_repo::find_many_by::<_, PatientMongo>(&self.collection, doc! {}).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PatientMongo {
    _id: ObjectId,
    email: String,
    is_email_verified: bool,
    password: String,
    #[serde(flatten)]
    profile: ProfileMongo,
    refresh_token: Option<String>,
    date_of_birth: Option<DateTime>,
    created_at: DateTime,
}

impl MongoDocument<Patient> for PatientMongo {
    fn into_domain(self) -> Patient {
        Patient {
            id: ID::from(self._id),
            email: self.email,
            is_email_verified: self.is_email_verified,
            password: PasswordHash::from_stored(self.password),
            profile: self.profile.into_domain(),
            refresh_token: self.refresh_token,
            date_of_birth: self.date_of_birth.map(|d| d.timestamp_millis()),
            created: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(patient: &Patient) -> Self {
        Self {
            _id: *patient.id.inner_ref(),
            email: patient.email.clone(),
            is_email_verified: patient.is_email_verified,
            password: patient.password.as_str().to_string(),
            profile: ProfileMongo::from_domain(&patient.profile),
            refresh_token: patient.refresh_token.clone(),
            date_of_birth: patient.date_of_birth.map(DateTime::from_millis),
            created_at: DateTime::from_millis(patient.created),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
