mod inmemory;
mod mongo;

use super::shared::repo::DeleteResult;
pub use inmemory::InMemoryReminderRepo;
use medtrack_domain::{Reminder, ID};
pub use mongo::MongoReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Reminders with `remind_at` in `[start, end]`, in no particular order
    async fn find_by_time_range(&self, start: i64, end: i64) -> anyhow::Result<Vec<Reminder>>;
    /// Reminders of the medication ordered by `remind_at`
    async fn find_by_medication(&self, medication_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    async fn update_medication_details(
        &self,
        medication_id: &ID,
        medication_name: &str,
        dosage: f64,
    ) -> anyhow::Result<()>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Deletes the reminders of the medication that are not taken and
    /// due at or after `now`
    async fn delete_pending_by_medication(
        &self,
        medication_id: &ID,
        now: i64,
    ) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, MedtrackContext};
    use medtrack_domain::{Reminder, ID};

    async fn create_contexts() -> Vec<MedtrackContext> {
        vec![
            MedtrackContext::create_inmemory(),
            setup_context().await.unwrap(),
        ]
    }

    fn reminder(medication_id: &ID, remind_at: i64) -> Reminder {
        Reminder {
            id: Default::default(),
            patient_id: ID::new(),
            medication_ids: vec![medication_id.clone()],
            remind_at,
            is_taken: false,
            medication_name: "Amoxicillin".into(),
            dosage: 500.0,
            patient_mobile_number: "+2347181354770".into(),
        }
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let mut reminder = reminder(&ID::new(), 1000);
            assert!(ctx.repos.reminders.insert(&reminder).await.is_ok());

            let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert_eq!(res, reminder);

            reminder.mark_taken();
            reminder.reschedule(2000);
            assert!(ctx.repos.reminders.save(&reminder).await.is_ok());
            let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
            assert!(res.is_taken);
            assert_eq!(res.remind_at, 2000);

            let deleted = ctx.repos.reminders.delete(&reminder.id).await.unwrap();
            assert_eq!(deleted, reminder);
            assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
            assert!(ctx.repos.reminders.delete(&reminder.id).await.is_none());
        }
    }

    #[tokio::test]
    async fn time_range_is_inclusive() {
        for ctx in create_contexts().await {
            let base = 1_000_000;
            let medication_id = ID::new();
            let reminders = vec![
                reminder(&medication_id, base - 1),
                reminder(&medication_id, base),
                reminder(&medication_id, base + 500),
                reminder(&medication_id, base + 1000),
                reminder(&medication_id, base + 1001),
            ];
            ctx.repos.reminders.bulk_insert(&reminders).await.unwrap();

            let mut found = ctx
                .repos
                .reminders
                .find_by_time_range(base, base + 1000)
                .await
                .unwrap()
                .into_iter()
                .filter(|r| r.is_for_medication(&medication_id))
                .map(|r| r.remind_at)
                .collect::<Vec<_>>();
            found.sort_unstable();
            assert_eq!(found, vec![base, base + 500, base + 1000]);
        }
    }

    #[tokio::test]
    async fn medication_details_and_pending_reminders() {
        for ctx in create_contexts().await {
            let medication_id = ID::new();
            let mut past = reminder(&medication_id, 100);
            past.mark_taken();
            let taken_future = {
                let mut r = reminder(&medication_id, 300);
                r.mark_taken();
                r
            };
            let pending = reminder(&medication_id, 400);
            let other = reminder(&ID::new(), 400);
            ctx.repos
                .reminders
                .bulk_insert(&[past.clone(), taken_future.clone(), pending.clone(), other.clone()])
                .await
                .unwrap();

            ctx.repos
                .reminders
                .update_medication_details(&medication_id, "Ibuprofen", 200.0)
                .await
                .unwrap();
            let found = ctx
                .repos
                .reminders
                .find_by_medication(&medication_id)
                .await
                .unwrap();
            assert_eq!(found.len(), 3);
            assert_eq!(
                found.iter().map(|r| r.remind_at).collect::<Vec<_>>(),
                vec![100, 300, 400]
            );
            assert!(found
                .iter()
                .all(|r| r.medication_name == "Ibuprofen" && r.dosage == 200.0));
            let other_found = ctx.repos.reminders.find(&other.id).await.unwrap();
            assert_eq!(other_found.medication_name, "Amoxicillin");

            let res = ctx
                .repos
                .reminders
                .delete_pending_by_medication(&medication_id, 200)
                .await
                .unwrap();
            assert_eq!(res.deleted_count, 1);
            assert!(ctx.repos.reminders.find(&pending.id).await.is_none());
            assert!(ctx.repos.reminders.find(&past.id).await.is_some());
            assert!(ctx.repos.reminders.find(&taken_future.id).await.is_some());
            assert!(ctx.repos.reminders.find(&other.id).await.is_some());
        }
    }
}
