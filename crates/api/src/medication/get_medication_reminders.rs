use crate::{
    error::MedtrackError,
    shared::{
        access::can_read_medication,
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_medication_reminders::{APIResponse, PathParams};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_medication_reminders_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetMedicationRemindersUseCase {
        user,
        medication_id: path.medication_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetMedicationRemindersUseCase {
    pub user: AuthenticatedUser,
    pub medication_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotAllowed(ID),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The medication with id: {}, was not found.", id))
            }
            UseCaseError::NotAllowed(id) => Self::Forbidden(format!(
                "Not allowed to read the reminders of the medication with id: {}",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMedicationRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMedicationReminders";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let medication = ctx
            .repos
            .medications
            .find(&self.medication_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.medication_id.clone()))?;
        if !can_read_medication(&self.user, &medication) {
            return Err(UseCaseError::NotAllowed(self.medication_id.clone()));
        }

        ctx.repos
            .reminders
            .find_by_medication(&medication.id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

impl PermissionBoundary for GetMedicationRemindersUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadMedication, Permission::ReadReminder]
    }
}
