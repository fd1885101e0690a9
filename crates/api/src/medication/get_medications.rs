use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::{get_current_medications, get_medication_history};
use medtrack_domain::{Medication, ID};
use medtrack_infra::MedtrackContext;

pub async fn get_current_medications_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetMedicationsUseCase {
        patient_id: user.id,
        include_completed: false,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|medications| {
            HttpResponse::Ok().json(get_current_medications::APIResponse::new(medications))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn get_medication_history_controller(
    http_req: HttpRequest,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetMedicationsUseCase {
        patient_id: user.id,
        include_completed: true,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|medications| {
            HttpResponse::Ok().json(get_medication_history::APIResponse::new(medications))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Medications of a patient, newest first. Completed ones are only part of
/// the history.
#[derive(Debug)]
pub struct GetMedicationsUseCase {
    pub patient_id: ID,
    pub include_completed: bool,
}

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
impl UseCase for GetMedicationsUseCase {
    type Response = Vec<Medication>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMedications";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let medications = if self.include_completed {
            ctx.repos.medications.find_by_patient(&self.patient_id).await
        } else {
            ctx.repos
                .medications
                .find_active_by_patient(&self.patient_id)
                .await
        };
        medications.map_err(|_| UseCaseError::StorageError)
    }
}

impl PermissionBoundary for GetMedicationsUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ReadOwnMedications]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn medication(patient_id: &ID, created: i64, is_completed: bool) -> Medication {
        Medication {
            id: Default::default(),
            patient_id: patient_id.clone(),
            doctor_id: Default::default(),
            medication_name: "Paracetamol".into(),
            diagnosis: "Fever".into(),
            times_to_be_taken: 2,
            dosage: 1.0,
            duration_in_hours: 72,
            is_completed,
            created,
        }
    }

    #[actix_web::test]
    async fn splits_current_medications_from_history() {
        let ctx = MedtrackContext::create_inmemory();
        let patient_id = ID::new();
        let active = medication(&patient_id, 20, false);
        let completed = medication(&patient_id, 10, true);
        let other_patient = medication(&ID::new(), 30, false);
        for m in [&active, &completed, &other_patient] {
            ctx.repos.medications.insert(m).await.unwrap();
        }

        let mut usecase = GetMedicationsUseCase {
            patient_id: patient_id.clone(),
            include_completed: false,
        };
        let current = usecase.execute(&ctx).await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, active.id);

        usecase.include_completed = true;
        let history = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            history.iter().map(|m| m.id.clone()).collect::<Vec<_>>(),
            vec![active.id, completed.id]
        );
    }
}
