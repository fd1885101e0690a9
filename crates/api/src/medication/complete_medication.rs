use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::complete_medication::{APIResponse, PathParams};
use medtrack_domain::{Medication, ID};
use medtrack_infra::MedtrackContext;
use tracing::info;

pub async fn complete_medication_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = CompleteMedicationUseCase {
        patient_id: user.id,
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

/// The patient marks a course as finished. Reminders that are still due are
/// dropped, the ones in the past are kept as history.
#[derive(Debug)]
pub struct CompleteMedicationUseCase {
    pub patient_id: ID,
    pub medication_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotOwner(ID),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The medication with id: {}, was not found.", id))
            }
            UseCaseError::NotOwner(id) => Self::Forbidden(format!(
                "The medication with id: {}, does not belong to the patient",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CompleteMedicationUseCase {
    type Response = Medication;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteMedication";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut medication = ctx
            .repos
            .medications
            .find(&self.medication_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.medication_id.clone()))?;
        if medication.patient_id != self.patient_id {
            return Err(UseCaseError::NotOwner(self.medication_id.clone()));
        }
        if medication.is_completed {
            return Ok(medication);
        }

        medication.complete();
        ctx.repos
            .medications
            .save(&medication)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let now = ctx.sys.get_timestamp_millis();
        let deleted = ctx
            .repos
            .reminders
            .delete_pending_by_medication(&medication.id, now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Medication {} completed, {} pending reminders removed",
            medication.id, deleted.deleted_count
        );

        Ok(medication)
    }
}

impl PermissionBoundary for CompleteMedicationUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CompleteMedication]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::Reminder;
    use medtrack_infra::StaticTimeSys;
    use std::sync::Arc;

    const HOUR: i64 = 1000 * 60 * 60;

    #[actix_web::test]
    async fn completes_and_drops_pending_reminders() {
        let mut ctx = MedtrackContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(30 * HOUR));
        let medication = Medication {
            id: Default::default(),
            patient_id: ID::new(),
            doctor_id: ID::new(),
            medication_name: "Amoxicillin".into(),
            diagnosis: "Chest infection".into(),
            times_to_be_taken: 2,
            dosage: 500.0,
            duration_in_hours: 48,
            is_completed: false,
            created: 0,
        };
        ctx.repos.medications.insert(&medication).await.unwrap();
        let reminders = medication
            .dose_times_after(0)
            .into_iter()
            .map(|t| Reminder::for_dose(&medication, "+2347181354770", t))
            .collect::<Vec<_>>();
        ctx.repos.reminders.bulk_insert(&reminders).await.unwrap();

        let mut usecase = CompleteMedicationUseCase {
            patient_id: ID::new(),
            medication_id: medication.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotOwner(medication.id.clone())
        );

        usecase.patient_id = medication.patient_id.clone();
        let completed = usecase.execute(&ctx).await.unwrap();
        assert!(completed.is_completed);
        assert!(ctx
            .repos
            .medications
            .find_active_by_patient(&medication.patient_id)
            .await
            .unwrap()
            .is_empty());

        let left = ctx
            .repos
            .reminders
            .find_by_medication(&medication.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.remind_at)
            .collect::<Vec<_>>();
        assert_eq!(left, vec![12 * HOUR, 24 * HOUR]);

        // Completing again is a no-op
        assert!(usecase.execute(&ctx).await.unwrap().is_completed);
    }
}
