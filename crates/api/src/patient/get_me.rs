use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_me::APIResponse;
use medtrack_domain::{Patient, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetMeUseCase {
        patient_id: user.id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|patient| HttpResponse::Ok().json(APIResponse::new(patient)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetMeUseCase {
    pub patient_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The patient with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMeUseCase {
    type Response = Patient;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMe";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .patients
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.patient_id.clone()))
    }
}

impl PermissionBoundary for GetMeUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadOwnPatientProfile]
    }
}
