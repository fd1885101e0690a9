use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_doctor_patients::{APIResponse, PathParams};
use medtrack_domain::{Patient, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_doctor_patients_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (_user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetDoctorPatientsUseCase {
        doctor_id: path_params.into_inner().doctor_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|patients| HttpResponse::Ok().json(APIResponse::new(patients)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Every patient the doctor has prescribed to
#[derive(Debug)]
pub struct GetDoctorPatientsUseCase {
    pub doctor_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The doctor with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDoctorPatientsUseCase {
    type Response = Vec<Patient>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDoctorPatients";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.doctors.find(&self.doctor_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.doctor_id.clone()));
        }

        let relations = ctx
            .repos
            .patient_doctors
            .find_by_doctor(&self.doctor_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let patient_ids = relations
            .into_iter()
            .map(|r| r.patient_id)
            .collect::<Vec<_>>();

        ctx.repos
            .patients
            .find_many(&patient_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

impl PermissionBoundary for GetDoctorPatientsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadProfiles]
    }
}
