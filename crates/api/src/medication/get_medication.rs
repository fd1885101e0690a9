use crate::{
    error::MedtrackError,
    shared::{
        access::can_read_medication,
        auth::{protect_route, AuthenticatedUser, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::get_medication::{APIResponse, PathParams};
use medtrack_domain::{Medication, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_medication_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetMedicationUseCase {
        user,
        medication_id: path.medication_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|medication| HttpResponse::Ok().json(APIResponse::new(medication)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetMedicationUseCase {
    pub user: AuthenticatedUser,
    pub medication_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotAllowed(ID),
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The medication with id: {}, was not found.", id))
            }
            UseCaseError::NotAllowed(id) => Self::Forbidden(format!(
                "Not allowed to read the medication with id: {}",
                id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMedicationUseCase {
    type Response = Medication;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMedication";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let medication = ctx
            .repos
            .medications
            .find(&self.medication_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.medication_id.clone()))?;

        if !can_read_medication(&self.user, &medication) {
            return Err(UseCaseError::NotAllowed(self.medication_id.clone()));
        }
        Ok(medication)
    }
}

impl PermissionBoundary for GetMedicationUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadMedication]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::UserRole;

    fn user(id: &ID, role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            id: id.clone(),
            email: "someone@example.com".into(),
            role,
        }
    }

    #[actix_web::test]
    async fn only_owner_and_prescriber_can_read() {
        let ctx = MedtrackContext::create_inmemory();
        let medication = Medication {
            id: Default::default(),
            patient_id: ID::new(),
            doctor_id: ID::new(),
            medication_name: "Ibuprofen".into(),
            diagnosis: "Back pain".into(),
            times_to_be_taken: 2,
            dosage: 200.0,
            duration_in_hours: 24,
            is_completed: false,
            created: 0,
        };
        ctx.repos.medications.insert(&medication).await.unwrap();

        for allowed in [
            user(&medication.patient_id, UserRole::Patient),
            user(&medication.doctor_id, UserRole::Doctor),
        ] {
            let mut usecase = GetMedicationUseCase {
                user: allowed,
                medication_id: medication.id.clone(),
            };
            assert_eq!(usecase.execute(&ctx).await.unwrap().id, medication.id);
        }

        let mut usecase = GetMedicationUseCase {
            user: user(&ID::new(), UserRole::Doctor),
            medication_id: medication.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotAllowed(medication.id.clone())
        );

        let unknown = ID::new();
        let mut usecase = GetMedicationUseCase {
            user: user(&medication.patient_id, UserRole::Patient),
            medication_id: unknown.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(unknown)
        );
    }
}
