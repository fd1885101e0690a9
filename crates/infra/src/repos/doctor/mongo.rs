use super::IDoctorRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::profile_mongo::ProfileMongo;
use medtrack_domain::{Doctor, PasswordHash, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoDoctorRepo {
    collection: Collection<Document>,
}

impl MongoDoctorRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("doctors"),
        }
    }
}

#[async_trait::async_trait]
impl IDoctorRepo for MongoDoctorRepo {
    async fn insert(&self, doctor: &Doctor) -> anyhow::Result<()> {
        mongo_repo::insert::<_, DoctorMongo>(&self.collection, doctor).await
    }

    async fn save(&self, doctor: &Doctor) -> anyhow::Result<()> {
        mongo_repo::save::<_, DoctorMongo>(&self.collection, doctor).await
    }

    async fn find(&self, doctor_id: &ID) -> Option<Doctor> {
        mongo_repo::find::<_, DoctorMongo>(&self.collection, doctor_id.inner_ref()).await
    }

    async fn find_by_email(&self, email: &str) -> Option<Doctor> {
        let filter = doc! {
            "email": email
        };
        mongo_repo::find_one_by::<_, DoctorMongo>(&self.collection, filter).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Doctor>> {
        mongo_repo::find_many_by::<_, DoctorMongo>(&self.collection, doc! {}).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DoctorMongo {
    _id: ObjectId,
    email: String,
    is_email_verified: bool,
    password: String,
    #[serde(flatten)]
    profile: ProfileMongo,
    refresh_token: Option<String>,
    created_at: DateTime,
}

impl MongoDocument<Doctor> for DoctorMongo {
    fn into_domain(self) -> Doctor {
        Doctor {
            id: ID::from(self._id),
            email: self.email,
            is_email_verified: self.is_email_verified,
            password: PasswordHash::from_stored(self.password),
            profile: self.profile.into_domain(),
            refresh_token: self.refresh_token,
            created: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(doctor: &Doctor) -> Self {
        Self {
            _id: *doctor.id.inner_ref(),
            email: doctor.email.clone(),
            is_email_verified: doctor.is_email_verified,
            password: doctor.password.as_str().to_string(),
            profile: ProfileMongo::from_domain(&doctor.profile),
            refresh_token: doctor.refresh_token.clone(),
            created_at: DateTime::from_millis(doctor.created),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
