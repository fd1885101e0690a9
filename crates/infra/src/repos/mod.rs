mod doctor;
mod medication;
mod otp;
mod patient;
mod patient_doctor;
mod reminder;
mod shared;

pub use doctor::IDoctorRepo;
use doctor::{InMemoryDoctorRepo, MongoDoctorRepo};
pub use medication::IMedicationRepo;
use medication::{InMemoryMedicationRepo, MongoMedicationRepo};
use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client, Database, IndexModel,
};
pub use otp::IOtpRepo;
use otp::{InMemoryOtpRepo, MongoOtpRepo};
pub use patient::IPatientRepo;
use patient::{InMemoryPatientRepo, MongoPatientRepo};
pub use patient_doctor::IPatientDoctorRepo;
use patient_doctor::{InMemoryPatientDoctorRepo, MongoPatientDoctorRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, MongoReminderRepo};
pub use shared::repo::DeleteResult;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub patients: Arc<dyn IPatientRepo>,
    pub doctors: Arc<dyn IDoctorRepo>,
    pub medications: Arc<dyn IMedicationRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub otps: Arc<dyn IOtpRepo>,
    pub patient_doctors: Arc<dyn IPatientDoctorRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Make sure that the db is ready before the server starts
        info!("DB CHECKING CONNECTION ...");
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        let reminders = MongoReminderRepo::new(&db);
        reminders.create_indexes().await?;
        create_email_index(&db, "patients").await?;
        create_email_index(&db, "doctors").await?;

        Ok(Self {
            patients: Arc::new(MongoPatientRepo::new(&db)),
            doctors: Arc::new(MongoDoctorRepo::new(&db)),
            medications: Arc::new(MongoMedicationRepo::new(&db)),
            reminders: Arc::new(reminders),
            otps: Arc::new(MongoOtpRepo::new(&db)),
            patient_doctors: Arc::new(MongoPatientDoctorRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            patients: Arc::new(InMemoryPatientRepo::new()),
            doctors: Arc::new(InMemoryDoctorRepo::new()),
            medications: Arc::new(InMemoryMedicationRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            otps: Arc::new(InMemoryOtpRepo::new()),
            patient_doctors: Arc::new(InMemoryPatientDoctorRepo::new()),
        }
    }
}

async fn create_email_index(db: &Database, collection: &str) -> anyhow::Result<()> {
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    db.collection::<mongodb::bson::Document>(collection)
        .create_index(index, None)
        .await?;
    Ok(())
}
