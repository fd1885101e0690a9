use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_doctors::APIResponse;
use medtrack_domain::Doctor;
use medtrack_infra::MedtrackContext;

pub async fn get_doctors_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (_user, policy) = protect_route(&http_req, &ctx).await?;

    execute_with_policy(GetDoctorsUseCase {}, &policy, &ctx)
        .await
        .map(|doctors| HttpResponse::Ok().json(APIResponse::new(doctors)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetDoctorsUseCase {}

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
impl UseCase for GetDoctorsUseCase {
    type Response = Vec<Doctor>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDoctors";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .doctors
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

impl PermissionBoundary for GetDoctorsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadProfiles]
    }
}
