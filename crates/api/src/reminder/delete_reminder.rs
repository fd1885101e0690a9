use super::{find_managed_reminder, ReminderAccessError};
use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::delete_reminder::{APIResponse, PathParams};
use medtrack_domain::{Reminder, ID};
use medtrack_infra::MedtrackContext;

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReminderUseCase {
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
pub struct DeleteReminderUseCase {
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
                "Not allowed to delete the reminder with id: {}",
                id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let reminder = find_managed_reminder(&self.user, &self.reminder_id, ctx).await?;

        ctx.repos
            .reminders
            .delete(&reminder.id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}

impl PermissionBoundary for DeleteReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteReminder]
    }
}
