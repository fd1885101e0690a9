use super::IReminderRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::DeleteResult,
};
use medtrack_domain::{Reminder, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};

pub struct MongoReminderRepo {
    collection: Collection<Document>,
}

impl MongoReminderRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("reminders"),
        }
    }

    /// The dispatch job queries reminders by `time` on every run
    pub async fn create_indexes(&self) -> anyhow::Result<()> {
        let time_index = IndexModel::builder()
            .keys(doc! { "time": 1 })
            .options(IndexOptions::builder().name("time_asc".to_string()).build())
            .build();
        let medication_index = IndexModel::builder()
            .keys(doc! { "medication_ids": 1 })
            .build();
        self.collection
            .create_indexes(vec![time_index, medication_index], None)
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        mongo_repo::bulk_insert::<_, ReminderMongo>(&self.collection, reminders).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::save::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        mongo_repo::find::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }

    async fn find_by_time_range(&self, start: i64, end: i64) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "time": {
                "$gte": DateTime::from_millis(start),
                "$lte": DateTime::from_millis(end)
            }
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter).await
    }

    async fn find_by_medication(&self, medication_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "medication_ids": medication_id.inner_ref()
        };
        let sort = doc! {
            "time": 1
        };
        mongo_repo::find_many_by_sorted::<_, ReminderMongo>(&self.collection, filter, Some(sort))
            .await
    }

    async fn update_medication_details(
        &self,
        medication_id: &ID,
        medication_name: &str,
        dosage: f64,
    ) -> anyhow::Result<()> {
        let filter = doc! {
            "medication_ids": medication_id.inner_ref()
        };
        let update = doc! {
            "$set": {
                "medication_name": medication_name,
                "dosage": dosage
            }
        };
        mongo_repo::update_many(&self.collection, filter, update).await
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        mongo_repo::delete::<_, ReminderMongo>(&self.collection, reminder_id.inner_ref()).await
    }

    async fn delete_pending_by_medication(
        &self,
        medication_id: &ID,
        now: i64,
    ) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "medication_ids": medication_id.inner_ref(),
            "is_taken": false,
            "time": {
                "$gte": DateTime::from_millis(now)
            }
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ObjectId,
    patient_id: ObjectId,
    medication_ids: Vec<ObjectId>,
    time: DateTime,
    is_taken: bool,
    medication_name: String,
    dosage: f64,
    patient_mobile_number: String,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn into_domain(self) -> Reminder {
        Reminder {
            id: ID::from(self._id),
            patient_id: ID::from(self.patient_id),
            medication_ids: self.medication_ids.into_iter().map(ID::from).collect(),
            remind_at: self.time.timestamp_millis(),
            is_taken: self.is_taken,
            medication_name: self.medication_name,
            dosage: self.dosage,
            patient_mobile_number: self.patient_mobile_number,
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: *reminder.id.inner_ref(),
            patient_id: *reminder.patient_id.inner_ref(),
            medication_ids: reminder
                .medication_ids
                .iter()
                .map(|id| *id.inner_ref())
                .collect(),
            time: DateTime::from_millis(reminder.remind_at),
            is_taken: reminder.is_taken,
            medication_name: reminder.medication_name.clone(),
            dosage: reminder.dosage,
            patient_mobile_number: reminder.patient_mobile_number.clone(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
