use crate::{
    error::MedtrackError,
    shared::{
        access::can_manage_reminders_of,
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::create_reminder::{APIResponse, RequestBody};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReminderUseCase {
        user,
        patient_id: body.patient_id,
        medication_id: body.medication_id,
        remind_at: body.time.timestamp_millis(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Adds a single extra `Reminder` for a dose of a medication
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user: AuthenticatedUser,
    pub patient_id: ID,
    pub medication_id: ID,
    pub remind_at: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotAllowed(ID),
    PatientNotFound(ID),
    MedicationNotFound(ID),
    MedicationOfOtherPatient(ID),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotAllowed(id) => Self::Forbidden(format!(
                "Not allowed to manage the reminders of the patient with id: {}",
                id
            )),
            UseCaseError::PatientNotFound(id) => {
                Self::NotFound(format!("The patient with id: {}, was not found.", id))
            }
            UseCaseError::MedicationNotFound(id) => {
                Self::NotFound(format!("The medication with id: {}, was not found.", id))
            }
            UseCaseError::MedicationOfOtherPatient(id) => Self::BadClientData(format!(
                "The medication with id: {}, is not prescribed to the given patient",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        if !can_manage_reminders_of(&self.user, &self.patient_id, ctx).await {
            return Err(UseCaseError::NotAllowed(self.patient_id.clone()));
        }

        let patient = ctx
            .repos
            .patients
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::PatientNotFound(self.patient_id.clone()))?;
        let medication = ctx
            .repos
            .medications
            .find(&self.medication_id)
            .await
            .ok_or_else(|| UseCaseError::MedicationNotFound(self.medication_id.clone()))?;
        if medication.patient_id != patient.id {
            return Err(UseCaseError::MedicationOfOtherPatient(
                self.medication_id.clone(),
            ));
        }

        let mobile_number = patient.profile.mobile_number.unwrap_or_default();
        let reminder = Reminder::for_dose(&medication, &mobile_number, self.remind_at);
        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for CreateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateReminder]
    }
}
