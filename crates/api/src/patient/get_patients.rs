use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_patients::APIResponse;
use medtrack_domain::Patient;
use medtrack_infra::MedtrackContext;

pub async fn get_patients_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (_user, policy) = protect_route(&http_req, &ctx).await?;

    execute_with_policy(GetPatientsUseCase {}, &policy, &ctx)
        .await
        .map(|patients| HttpResponse::Ok().json(APIResponse::new(patients)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetPatientsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPatientsUseCase {
    type Response = Vec<Patient>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPatients";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .patients
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

impl PermissionBoundary for GetPatientsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadProfiles]
    }
}
