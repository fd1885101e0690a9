use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::update_doctor::{APIResponse, PathParams, RequestBody};
use medtrack_domain::{Doctor, MobileNumberError, ProfileUpdate, ID};
use medtrack_infra::MedtrackContext;

pub async fn update_doctor_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    if user.id != path_params.doctor_id {
        return Err(MedtrackError::Forbidden(
            "Doctors can only update their own profile".into(),
        ));
    }

    let body = body.0;
    let usecase = UpdateDoctorUseCase {
        doctor_id: user.id,
        update: ProfileUpdate {
            first_name: body.first_name,
            last_name: body.last_name,
            mobile_number: body.mobile_number,
        },
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
pub struct UpdateDoctorUseCase {
    pub doctor_id: ID,
    pub update: ProfileUpdate,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidMobileNumber(MobileNumberError),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The doctor with id: {}, was not found.", id))
            }
            UseCaseError::InvalidMobileNumber(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateDoctorUseCase {
    type Response = Doctor;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateDoctor";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut doctor = ctx
            .repos
            .doctors
            .find(&self.doctor_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.doctor_id.clone()))?;

        doctor
            .profile
            .apply(self.update.clone())
            .map_err(UseCaseError::InvalidMobileNumber)?;

        ctx.repos
            .doctors
            .save(&doctor)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(doctor)
    }
}

impl PermissionBoundary for UpdateDoctorUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateDoctorProfile]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::PasswordHash;

    #[actix_web::test]
    async fn keeps_international_numbers() {
        let ctx = MedtrackContext::create_inmemory();
        let password = PasswordHash::from_stored("stored".into());
        let doctor = Doctor::new("doc@clinic.org".into(), password, 0);
        ctx.repos.doctors.insert(&doctor).await.unwrap();

        let mut usecase = UpdateDoctorUseCase {
            doctor_id: doctor.id.clone(),
            update: ProfileUpdate {
                mobile_number: Some("+2348031234567".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            updated.profile.mobile_number.as_deref(),
            Some("+2348031234567")
        );
        let stored = ctx.repos.doctors.find(&doctor.id).await.unwrap();
        assert_eq!(stored.profile, updated.profile);
    }
}
