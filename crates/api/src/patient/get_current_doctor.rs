use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_current_doctor::APIResponse;
use medtrack_domain::{Doctor, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_current_doctor_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetCurrentDoctorUseCase {
        patient_id: user.id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|doctor| HttpResponse::Ok().json(APIResponse::new(doctor)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// The doctor of the most recent treatment relation of the patient
#[derive(Debug)]
pub struct GetCurrentDoctorUseCase {
    pub patient_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoDoctor,
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoDoctor => {
                Self::NotFound("The patient is not treated by any doctor".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCurrentDoctorUseCase {
    type Response = Doctor;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCurrentDoctor";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let relations = ctx
            .repos
            .patient_doctors
            .find_by_patient(&self.patient_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let current = relations.into_iter().next().ok_or(UseCaseError::NoDoctor)?;
        ctx.repos
            .doctors
            .find(&current.doctor_id)
            .await
            .ok_or(UseCaseError::NoDoctor)
    }
}

impl PermissionBoundary for GetCurrentDoctorUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadCurrentDoctor]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{PasswordHash, PatientDoctor};

    fn doctor(email: &str) -> Doctor {
        Doctor::new(email.into(), PasswordHash::from_stored("stored".into()), 0)
    }

    #[actix_web::test]
    async fn returns_latest_doctor() {
        let ctx = MedtrackContext::create_inmemory();
        let patient_id = ID::new();
        let mut usecase = GetCurrentDoctorUseCase {
            patient_id: patient_id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NoDoctor
        );

        let first = doctor("first@clinic.org");
        let second = doctor("second@clinic.org");
        ctx.repos.doctors.insert(&first).await.unwrap();
        ctx.repos.doctors.insert(&second).await.unwrap();
        let relations = [
            PatientDoctor::new(patient_id.clone(), first.id.clone(), 10),
            PatientDoctor::new(patient_id.clone(), second.id.clone(), 20),
        ];
        for relation in &relations {
            ctx.repos.patient_doctors.insert(relation).await.unwrap();
        }

        let current = usecase.execute(&ctx).await.unwrap();
        assert_eq!(current.id, second.id);
    }
}
