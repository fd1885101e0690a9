use crate::{reminder::DispatchRemindersUseCase, shared::usecase::execute};
use medtrack_infra::MedtrackContext;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::info;

/// Owned handle to a recurring job. The job runs until it is stopped or the
/// handle is dropped.
#[derive(Debug)]
pub struct JobHandle {
    handle: JoinHandle<()>,
}

impl JobHandle {
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for JobHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn millis(value: i64) -> Duration {
    Duration::from_millis(value.max(1) as u64)
}

/// Texts due reminders every `reminder_dispatch.interval_millis`, the first
/// run being one interval after the job is started.
///
/// A run is awaited before the next tick is taken, and ticks missed while a
/// run was in progress are skipped, so runs never overlap.
pub fn start_reminder_dispatch_job(ctx: MedtrackContext) -> JobHandle {
    let period = millis(ctx.config.reminder_dispatch.interval_millis);
    let handle = actix_web::rt::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Reminder dispatch job scheduled every {:?}", period);
        loop {
            interval.tick().await;

            let usecase = DispatchRemindersUseCase {
                window_millis: ctx.config.reminder_dispatch.window_millis,
                skip_taken: ctx.config.reminder_dispatch.skip_taken,
            };
            let _ = execute(usecase, &ctx).await;
        }
    });

    JobHandle { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtrack_domain::{Medication, Reminder, ID};
    use medtrack_infra::{DeleteResult, IReminderRepo, InMemorySmsGateway, Services, StaticTimeSys};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tokio::task::LocalSet;

    const MINUTE: i64 = 1000 * 60;
    const NOW: i64 = 1_700_000_000_000;

    async fn setup() -> (MedtrackContext, Arc<InMemorySmsGateway>) {
        let sms = Arc::new(InMemorySmsGateway::new());
        let mut ctx = MedtrackContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        ctx.config.reminder_dispatch.interval_millis = 30 * MINUTE;
        ctx.config.reminder_dispatch.window_millis = 30 * MINUTE;
        ctx.services = Services {
            sms: sms.clone(),
            ..Services::create_inmemory()
        };

        let medication = Medication {
            id: Default::default(),
            patient_id: ID::new(),
            doctor_id: ID::new(),
            medication_name: "Amoxicillin".into(),
            diagnosis: "Chest infection".into(),
            times_to_be_taken: 3,
            dosage: 500.0,
            duration_in_hours: 24,
            is_completed: false,
            created: 0,
        };
        let reminder = Reminder::for_dose(&medication, "+2347181354770", NOW + 10 * MINUTE);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        (ctx, sms)
    }

    async fn advance(minutes: u64) {
        tokio::time::sleep(Duration::from_secs(minutes * 60)).await;
        // Let the job finish the run that the tick woke it up for
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_run_is_one_interval_after_start() {
        LocalSet::new()
            .run_until(async {
                let (ctx, sms) = setup().await;
                let _job = start_reminder_dispatch_job(ctx);

                advance(29).await;
                assert!(sms.sent().is_empty());

                advance(1).await;
                assert_eq!(sms.sent().len(), 1);

                advance(30).await;
                assert_eq!(sms.sent().len(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_job_does_not_run() {
        LocalSet::new()
            .run_until(async {
                let (ctx, sms) = setup().await;
                let job = start_reminder_dispatch_job(ctx);
                job.stop();

                advance(60).await;
                assert!(sms.sent().is_empty());
                assert!(job.is_finished());
            })
            .await;
    }

    /// Fails the first `find_by_time_range` and delegates everything else
    struct FailsOnceReminderRepo {
        inner: Arc<dyn IReminderRepo>,
        range_queries: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl IReminderRepo for FailsOnceReminderRepo {
        async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
            self.inner.insert(reminder).await
        }
        async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
            self.inner.bulk_insert(reminders).await
        }
        async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
            self.inner.save(reminder).await
        }
        async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
            self.inner.find(reminder_id).await
        }
        async fn find_by_time_range(&self, start: i64, end: i64) -> anyhow::Result<Vec<Reminder>> {
            if self.range_queries.fetch_add(1, Ordering::SeqCst) == 0 {
                anyhow::bail!("connection reset");
            }
            self.inner.find_by_time_range(start, end).await
        }
        async fn find_by_medication(&self, medication_id: &ID) -> anyhow::Result<Vec<Reminder>> {
            self.inner.find_by_medication(medication_id).await
        }
        async fn update_medication_details(
            &self,
            medication_id: &ID,
            medication_name: &str,
            dosage: f64,
        ) -> anyhow::Result<()> {
            self.inner
                .update_medication_details(medication_id, medication_name, dosage)
                .await
        }
        async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
            self.inner.delete(reminder_id).await
        }
        async fn delete_pending_by_medication(
            &self,
            medication_id: &ID,
            now: i64,
        ) -> anyhow::Result<DeleteResult> {
            self.inner
                .delete_pending_by_medication(medication_id, now)
                .await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failed_run_does_not_stop_the_job() {
        LocalSet::new()
            .run_until(async {
                let (mut ctx, sms) = setup().await;
                ctx.repos.reminders = Arc::new(FailsOnceReminderRepo {
                    inner: ctx.repos.reminders.clone(),
                    range_queries: AtomicUsize::new(0),
                });
                let job = start_reminder_dispatch_job(ctx);

                advance(30).await;
                assert!(sms.sent().is_empty());
                assert!(!job.is_finished());

                advance(30).await;
                assert_eq!(sms.sent().len(), 1);
            })
            .await;
    }
}
