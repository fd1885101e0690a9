use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use medtrack_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        bulk_insert(reminders, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_time_range(&self, start: i64, end: i64) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |r| r.is_due_within(start, end)))
    }

    async fn find_by_medication(&self, medication_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.is_for_medication(medication_id));
        reminders.sort_by_key(|r| r.remind_at);
        Ok(reminders)
    }

    async fn update_medication_details(
        &self,
        medication_id: &ID,
        medication_name: &str,
        dosage: f64,
    ) -> anyhow::Result<()> {
        update_many(
            &self.reminders,
            |r| r.is_for_medication(medication_id),
            |r| {
                r.medication_name = medication_name.to_string();
                r.dosage = dosage;
            },
        );
        Ok(())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn delete_pending_by_medication(
        &self,
        medication_id: &ID,
        now: i64,
    ) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| {
            r.is_for_medication(medication_id) && r.is_pending(now)
        }))
    }
}
