use super::{find_managed_reminder, ReminderAccessError};
use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateReminderUseCase {
        user,
        reminder_id: path.reminder_id.clone(),
        remind_at: body.time.timestamp_millis(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Moves a `Reminder` to another point in time
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user: AuthenticatedUser,
    pub reminder_id: ID,
    pub remind_at: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotAllowed(ID),
    StorageError,
}

impl From<ReminderAccessError> for UseCaseError {
    fn from(e: ReminderAccessError) -> Self {
        match e {
            ReminderAccessError::NotFound(id) => Self::NotFound(id),
            ReminderAccessError::NotAllowed(id) => Self::NotAllowed(id),
        }
    }
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The reminder with id: {}, was not found.", id))
            }
            UseCaseError::NotAllowed(id) => Self::Forbidden(format!(
                "Not allowed to update the reminder with id: {}",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = find_managed_reminder(&self.user, &self.reminder_id, ctx).await?;

        reminder.reschedule(self.remind_at);
        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for UpdateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{Medication, UserRole};

    #[actix_web::test]
    async fn reschedules_reminder() {
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

        let mut usecase = UpdateReminderUseCase {
            user: AuthenticatedUser {
                id: medication.patient_id.clone(),
                email: "ada@example.com".into(),
                role: UserRole::Patient,
            },
            reminder_id: reminder.id.clone(),
            remind_at: 5000,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().remind_at, 5000);

        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(stored.remind_at, 5000);
        assert!(!stored.is_taken);

        usecase.reminder_id = ID::new();
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(usecase.reminder_id.clone())
        );
    }
}
