use super::{find_managed_reminder, ReminderAccessError};
use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_reminder::{APIResponse, PathParams};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetReminderUseCase {
        user,
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

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub user: AuthenticatedUser,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotAllowed(ID),
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
                "Not allowed to read the reminder with id: {}",
                id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let reminder = find_managed_reminder(&self.user, &self.reminder_id, ctx).await?;
        Ok(reminder)
    }
}

impl PermissionBoundary for GetReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{Medication, PatientDoctor, UserRole};

    #[actix_web::test]
    async fn patient_and_treating_doctor_can_read() {
        let ctx = MedtrackContext::create_inmemory();
        let medication = Medication {
            id: Default::default(),
            patient_id: ID::new(),
            doctor_id: ID::new(),
            medication_name: "Lisinopril".into(),
            diagnosis: "Hypertension".into(),
            times_to_be_taken: 1,
            dosage: 10.0,
            duration_in_hours: 24,
            is_completed: false,
            created: 0,
        };
        let reminder = Reminder::for_dose(&medication, "+2347181354770", 100);
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        ctx.repos
            .patient_doctors
            .insert(&PatientDoctor::new(
                medication.patient_id.clone(),
                medication.doctor_id.clone(),
                0,
            ))
            .await
            .unwrap();

        let readers = [
            (medication.patient_id.clone(), UserRole::Patient),
            (medication.doctor_id.clone(), UserRole::Doctor),
        ];
        for (id, role) in readers {
            let mut usecase = GetReminderUseCase {
                user: AuthenticatedUser {
                    id,
                    email: "someone@example.com".into(),
                    role,
                },
                reminder_id: reminder.id.clone(),
            };
            assert_eq!(usecase.execute(&ctx).await.unwrap(), reminder);
        }

        let mut usecase = GetReminderUseCase {
            user: AuthenticatedUser {
                id: ID::new(),
                email: "stranger@example.com".into(),
                role: UserRole::Patient,
            },
            reminder_id: reminder.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotAllowed(reminder.id.clone())
        );
    }
}
