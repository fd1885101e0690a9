use super::{prepare_registration, RegistrationError};
use crate::{
    error::MedtrackError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use medtrack_api_structs::{
    dtos::PatientDTO,
    register_patient::{APIResponse, RequestBody},
};
use medtrack_domain::Patient;
use medtrack_infra::MedtrackContext;
use std::fmt;

pub async fn register_patient_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let body = body.0;
    let usecase = RegisterPatientUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|patient| {
            HttpResponse::Created().json(APIResponse {
                patient: PatientDTO::new(patient),
            })
        })
        .map_err(MedtrackError::from)
}

pub struct RegisterPatientUseCase {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterPatientUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterPatientUseCase")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterPatientUseCase {
    type Response = Patient;

    type Error = RegistrationError;

    const NAME: &'static str = "RegisterPatient";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let (email, password) = prepare_registration(&self.email, &self.password, ctx).await?;

        let patient = Patient::new(email, password, ctx.sys.get_timestamp_millis());
        ctx.repos
            .patients
            .insert(&patient)
            .await
            .map_err(|_| RegistrationError::StorageError)?;

        Ok(patient)
    }
}
