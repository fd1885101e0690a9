use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::update_patient::{APIResponse, RequestBody};
use medtrack_domain::{MobileNumberError, Patient, ProfileUpdate, ID};
use medtrack_infra::MedtrackContext;

pub async fn update_patient_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdatePatientUseCase {
        patient_id: user.id,
        update: ProfileUpdate {
            first_name: body.first_name,
            last_name: body.last_name,
            mobile_number: body.mobile_number,
        },
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
pub struct UpdatePatientUseCase {
    pub patient_id: ID,
    pub update: ProfileUpdate,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidMobileNumber(MobileNumberError),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The patient with id: {}, was not found.", id))
            }
            UseCaseError::InvalidMobileNumber(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePatientUseCase {
    type Response = Patient;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdatePatient";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut patient = ctx
            .repos
            .patients
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.patient_id.clone()))?;

        patient
            .profile
            .apply(self.update.clone())
            .map_err(UseCaseError::InvalidMobileNumber)?;

        ctx.repos
            .patients
            .save(&patient)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(patient)
    }
}

impl PermissionBoundary for UpdatePatientUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdatePatientProfile]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::PasswordHash;

    async fn setup(ctx: &MedtrackContext) -> Patient {
        let password = PasswordHash::from_stored("stored".into());
        let patient = Patient::new("ada@example.com".into(), password, 0);
        ctx.repos.patients.insert(&patient).await.unwrap();
        patient
    }

    #[actix_web::test]
    async fn normalizes_local_mobile_numbers() {
        let ctx = MedtrackContext::create_inmemory();
        let patient = setup(&ctx).await;

        let mut usecase = UpdatePatientUseCase {
            patient_id: patient.id.clone(),
            update: ProfileUpdate {
                first_name: Some("Ada".into()),
                mobile_number: Some("07181354770".into()),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(
            updated.profile.mobile_number.as_deref(),
            Some("+2347181354770")
        );
    }

    #[actix_web::test]
    async fn rejects_unparsable_mobile_number() {
        let ctx = MedtrackContext::create_inmemory();
        let patient = setup(&ctx).await;

        let mut usecase = UpdatePatientUseCase {
            patient_id: patient.id.clone(),
            update: ProfileUpdate {
                last_name: Some("Obi".into()),
                mobile_number: Some("12345".into()),
                ..Default::default()
            },
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidMobileNumber(_))
        ));
        let stored = ctx.repos.patients.find(&patient.id).await.unwrap();
        assert!(stored.profile.last_name.is_none());
    }
}
