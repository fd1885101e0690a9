use super::{prepare_registration, RegistrationError};
use crate::{
    error::MedtrackError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use medtrack_api_structs::{
    dtos::DoctorDTO,
    register_doctor::{APIResponse, RequestBody},
};
use medtrack_domain::Doctor;
use medtrack_infra::MedtrackContext;
use std::fmt;

pub async fn register_doctor_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let body = body.0;
    let usecase = RegisterDoctorUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|doctor| {
            HttpResponse::Created().json(APIResponse {
                doctor: DoctorDTO::new(doctor),
            })
        })
        .map_err(MedtrackError::from)
}

pub struct RegisterDoctorUseCase {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterDoctorUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterDoctorUseCase")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterDoctorUseCase {
    type Response = Doctor;

    type Error = RegistrationError;

    const NAME: &'static str = "RegisterDoctor";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let (email, password) = prepare_registration(&self.email, &self.password, ctx).await?;

        let doctor = Doctor::new(email, password, ctx.sys.get_timestamp_millis());
        ctx.repos
            .doctors
            .insert(&doctor)
            .await
            .map_err(|_| RegistrationError::StorageError)?;

        Ok(doctor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn registers_doctor_once() {
        let ctx = MedtrackContext::create_inmemory();
        let mut usecase = RegisterDoctorUseCase {
            email: "doc@clinic.org".into(),
            password: "secret-password".into(),
        };
        let doctor = usecase.execute(&ctx).await.unwrap();
        assert!(ctx.repos.doctors.find(&doctor.id).await.is_some());

        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            RegistrationError::EmailTaken("doc@clinic.org".into())
        );
    }
}
