use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::mark_reminder_taken::{APIResponse, PathParams};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn mark_reminder_taken_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = MarkReminderTakenUseCase {
        patient_id: user.id,
        reminder_id: path.reminder_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// The patient confirms the dose of a `Reminder` was taken
#[derive(Debug)]
pub struct MarkReminderTakenUseCase {
    pub patient_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotOwner(ID),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The reminder with id: {}, was not found.", id))
            }
            UseCaseError::NotOwner(id) => Self::Forbidden(format!(
                "The reminder with id: {}, does not belong to the patient",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkReminderTakenUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderTaken";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))?;
        if reminder.patient_id != self.patient_id {
            return Err(UseCaseError::NotOwner(self.reminder_id.clone()));
        }
        if reminder.is_taken {
            return Ok(reminder);
        }

        reminder.mark_taken();
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for MarkReminderTakenUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::TakeReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::Medication;

    #[actix_web::test]
    async fn marks_taken_once() {
        let ctx = MedtrackContext::create_inmemory();
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
        let reminder = Reminder::for_dose(&medication, "+2347181354770", 100);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = MarkReminderTakenUseCase {
            patient_id: ID::new(),
            reminder_id: reminder.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotOwner(reminder.id.clone())
        );

        usecase.patient_id = medication.patient_id.clone();
        assert!(usecase.execute(&ctx).await.unwrap().is_taken);
        assert!(usecase.execute(&ctx).await.unwrap().is_taken);
        assert!(ctx.repos.reminders.find(&reminder.id).await.unwrap().is_taken);
    }
}
