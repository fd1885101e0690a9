use crate::shared::usecase::UseCase;
use medtrack_infra::MedtrackContext;
use tracing::{error, info};

/// Texts every patient whose `Reminder` is due within the next window.
///
/// Run by the reminder dispatch job. Consecutive runs compute their window
/// from the clock so a `Reminder` close to a window edge can be texted twice.
#[derive(Debug)]
pub struct DispatchRemindersUseCase {
    pub window_millis: i64,
    /// Leave out the `Reminder`s that are already taken
    pub skip_taken: bool,
}

#[derive(Debug, PartialEq, Default)]
pub struct DispatchSummary {
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchRemindersUseCase {
    type Response = DispatchSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminders";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let end = now + self.window_millis;

        let mut reminders = ctx
            .repos
            .reminders
            .find_by_time_range(now, end)
            .await
            .map_err(|e| {
                error!("Unable to query reminders due in [{}, {}]: {:?}", now, end, e);
                UseCaseError::StorageError
            })?;
        if self.skip_taken {
            reminders.retain(|r| !r.is_taken);
        }

        let mut summary = DispatchSummary {
            due: reminders.len(),
            ..Default::default()
        };
        for reminder in reminders {
            let message = reminder.notification_message();
            match ctx
                .services
                .sms
                .send(&reminder.patient_mobile_number, &message)
                .await
            {
                Ok(_) => summary.sent += 1,
                Err(e) => {
                    summary.failed += 1;
                    error!(
                        "Unable to text reminder {} to {:?}: {:?}",
                        reminder.id, reminder.patient_mobile_number, e
                    );
                }
            }
        }

        info!(
            "Dispatched reminders due in [{}, {}]: {:?}",
            now, end, summary
        );
        Ok(summary)
    }
}
