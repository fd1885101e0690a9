use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_doctor::{APIResponse, PathParams};
use medtrack_domain::{Doctor, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_doctor_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (_user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetDoctorUseCase {
        doctor_id: path_params.into_inner().doctor_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|doctor| HttpResponse::Ok().json(APIResponse::new(doctor)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetDoctorUseCase {
    pub doctor_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The doctor with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDoctorUseCase {
    type Response = Doctor;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDoctor";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .doctors
            .find(&self.doctor_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.doctor_id.clone()))
    }
}

impl PermissionBoundary for GetDoctorUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadProfiles]
    }
}
