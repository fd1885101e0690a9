use super::reminders_after;
use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::update_medication::{APIResponse, PathParams, RequestBody};
use medtrack_domain::{Medication, MedicationError, ID};
use medtrack_infra::MedtrackContext;
use tracing::info;

pub async fn update_medication_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateMedicationUseCase {
        doctor_id: user.id,
        medication_id: path.medication_id.clone(),
        medication_name: body.medication_name,
        diagnosis: body.diagnosis,
        times_to_be_taken: body.times_to_be_taken,
        dosage: body.dosage,
        duration_in_hours: body.duration_in_hours,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|medication| HttpResponse::Ok().json(APIResponse::new(medication)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// The prescribing doctor changes a medication.
///
/// Name and dosage changes are copied onto every reminder of the medication.
/// When the schedule changes the pending reminders are replaced by the doses
/// left in the new schedule.
#[derive(Debug)]
pub struct UpdateMedicationUseCase {
    pub doctor_id: ID,
    pub medication_id: ID,
    pub medication_name: Option<String>,
    pub diagnosis: Option<String>,
    pub times_to_be_taken: Option<i64>,
    pub dosage: Option<f64>,
    pub duration_in_hours: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotPrescriber(ID),
    InvalidMedication(MedicationError),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The medication with id: {}, was not found.", id))
            }
            UseCaseError::NotPrescriber(id) => Self::Forbidden(format!(
                "Only the prescribing doctor can update the medication with id: {}",
                id
            )),
            UseCaseError::InvalidMedication(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMedicationUseCase {
    type Response = Medication;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMedication";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let mut medication = ctx
            .repos
            .medications
            .find(&self.medication_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.medication_id.clone()))?;
        if medication.doctor_id != self.doctor_id {
            return Err(UseCaseError::NotPrescriber(self.medication_id.clone()));
        }

        let previous = medication.clone();
        if let Some(name) = &self.medication_name {
            medication.medication_name = name.trim().to_string();
        }
        if let Some(diagnosis) = &self.diagnosis {
            medication.diagnosis = diagnosis.clone();
        }
        if let Some(times_to_be_taken) = self.times_to_be_taken {
            medication.times_to_be_taken = times_to_be_taken;
        }
        if let Some(dosage) = self.dosage {
            medication.dosage = dosage;
        }
        if let Some(duration_in_hours) = self.duration_in_hours {
            medication.duration_in_hours = duration_in_hours;
        }
        medication
            .validate()
            .map_err(UseCaseError::InvalidMedication)?;

        ctx.repos
            .medications
            .save(&medication)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if medication.medication_name != previous.medication_name
            || medication.dosage != previous.dosage
        {
            ctx.repos
                .reminders
                .update_medication_details(
                    &medication.id,
                    &medication.medication_name,
                    medication.dosage,
                )
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        let schedule_changed = medication.times_to_be_taken != previous.times_to_be_taken
            || medication.duration_in_hours != previous.duration_in_hours;
        if schedule_changed && !medication.is_completed {
            self.reschedule_reminders(&medication, ctx).await?;
        }

        Ok(medication)
    }
}

impl UpdateMedicationUseCase {
    async fn reschedule_reminders(
        &self,
        medication: &Medication,
        ctx: &MedtrackContext,
    ) -> Result<(), UseCaseError> {
        let now = ctx.sys.get_timestamp_millis();
        let deleted = ctx
            .repos
            .reminders
            .delete_pending_by_medication(&medication.id, now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mobile_number = ctx
            .repos
            .patients
            .find(&medication.patient_id)
            .await
            .and_then(|p| p.profile.mobile_number)
            .unwrap_or_default();
        let reminders = reminders_after(medication, &mobile_number, now);
        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Rescheduled medication {}: {} pending reminders replaced by {}",
            medication.id,
            deleted.deleted_count,
            reminders.len()
        );
        Ok(())
    }
}

impl PermissionBoundary for UpdateMedicationUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateMedication]
    }
}
