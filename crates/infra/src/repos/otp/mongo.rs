use super::IOtpRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use medtrack_domain::{Otp, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoOtpRepo {
    collection: Collection<Document>,
}

impl MongoOtpRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("otps"),
        }
    }
}

#[async_trait::async_trait]
impl IOtpRepo for MongoOtpRepo {
    async fn insert(&self, otp: &Otp) -> anyhow::Result<()> {
        mongo_repo::insert::<_, OtpMongo>(&self.collection, otp).await
    }

    async fn find_by_owner(&self, owner_id: &ID) -> Option<Otp> {
        let filter = doc! {
            "owner": owner_id.inner_ref()
        };
        mongo_repo::find_one_by::<_, OtpMongo>(&self.collection, filter).await
    }

    async fn delete(&self, otp_id: &ID) -> Option<Otp> {
        mongo_repo::delete::<_, OtpMongo>(&self.collection, otp_id.inner_ref()).await
    }

    async fn delete_by_owner(&self, owner_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "owner": owner_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OtpMongo {
    _id: ObjectId,
    owner: ObjectId,
    otp: String,
    created_at: DateTime,
}

impl MongoDocument<Otp> for OtpMongo {
    fn into_domain(self) -> Otp {
        Otp {
            id: ID::from(self._id),
            owner_id: ID::from(self.owner),
            code: self.otp,
            created: self.created_at.timestamp_millis(),
        }
    }

    fn from_domain(otp: &Otp) -> Self {
        Self {
            _id: *otp.id.inner_ref(),
            owner: *otp.owner_id.inner_ref(),
            otp: otp.code.clone(),
            created_at: DateTime::from_millis(otp.created),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
