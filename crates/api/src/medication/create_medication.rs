use super::reminders_after;
use crate::{
    error::MedtrackError,
    shared::{
        auth::{protect_route, Permission},
        usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use medtrack_api_structs::create_medication::{APIResponse, RequestBody};
use medtrack_domain::{Medication, MedicationError, PatientDoctor, Reminder, ID};
use medtrack_infra::MedtrackContext;
use tracing::info;

pub async fn create_medication_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MedtrackContext>,
) -> Result<HttpResponse, MedtrackError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateMedicationUseCase {
        doctor_id: user.id,
        patient_id: body.patient_id,
        medication_name: body.medication_name,
        diagnosis: body.diagnosis,
        times_to_be_taken: body.times_to_be_taken,
        dosage: body.dosage,
        duration_in_hours: body.duration_in_hours,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|(medication, reminders)| {
            HttpResponse::Created().json(APIResponse::new(medication, reminders))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => MedtrackError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// A doctor prescribes a medication to a patient, which schedules a
/// `Reminder` for every dose of the course
#[derive(Debug)]
pub struct CreateMedicationUseCase {
    pub doctor_id: ID,
    pub patient_id: ID,
    pub medication_name: String,
    pub diagnosis: String,
    pub times_to_be_taken: i64,
    pub dosage: f64,
    pub duration_in_hours: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PatientNotFound(ID),
    InvalidMedication(MedicationError),
    StorageError,
}

impl From<UseCaseError> for MedtrackError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::PatientNotFound(id) => {
                Self::NotFound(format!("The patient with id: {}, was not found.", id))
            }
            UseCaseError::InvalidMedication(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateMedicationUseCase {
    type Response = (Medication, Vec<Reminder>);

    type Error = UseCaseError;

    const NAME: &'static str = "CreateMedication";

    async fn execute(&mut self, ctx: &MedtrackContext) -> Result<Self::Response, Self::Error> {
        let patient = ctx
            .repos
            .patients
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::PatientNotFound(self.patient_id.clone()))?;

        let now = ctx.sys.get_timestamp_millis();
        let medication = Medication {
            id: Default::default(),
            patient_id: patient.id.clone(),
            doctor_id: self.doctor_id.clone(),
            medication_name: self.medication_name.trim().to_string(),
            diagnosis: self.diagnosis.clone(),
            times_to_be_taken: self.times_to_be_taken,
            dosage: self.dosage,
            duration_in_hours: self.duration_in_hours,
            is_completed: false,
            created: now,
        };
        medication
            .validate()
            .map_err(UseCaseError::InvalidMedication)?;

        ctx.repos
            .medications
            .insert(&medication)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        if ctx
            .repos
            .patient_doctors
            .find(&patient.id, &self.doctor_id)
            .await
            .is_none()
        {
            let relation = PatientDoctor::new(patient.id.clone(), self.doctor_id.clone(), now);
            ctx.repos
                .patient_doctors
                .insert(&relation)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        let mobile_number = patient.profile.mobile_number.unwrap_or_default();
        let reminders = reminders_after(&medication, &mobile_number, medication.created);
        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Scheduled {} reminders for medication {}",
            reminders.len(),
            medication.id
        );

        Ok((medication, reminders))
    }
}

impl PermissionBoundary for CreateMedicationUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::PrescribeMedication]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use medtrack_domain::{PasswordHash, Patient};
    use medtrack_infra::StaticTimeSys;
    use std::sync::Arc;

    const HOUR: i64 = 1000 * 60 * 60;

    struct TestContext {
        ctx: MedtrackContext,
        patient: Patient,
        doctor_id: ID,
    }

    async fn setup() -> TestContext {
        let mut ctx = MedtrackContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(1000));
        let password = PasswordHash::from_stored("stored".into());
        let mut patient = Patient::new("ada@example.com".into(), password, 0);
        patient.profile.mobile_number = Some("+2347181354770".into());
        ctx.repos.patients.insert(&patient).await.unwrap();

        TestContext {
            ctx,
            patient,
            doctor_id: ID::new(),
        }
    }

    fn usecase(patient_id: &ID, doctor_id: &ID) -> CreateMedicationUseCase {
        CreateMedicationUseCase {
            doctor_id: doctor_id.clone(),
            patient_id: patient_id.clone(),
            medication_name: "Amoxicillin".into(),
            diagnosis: "Chest infection".into(),
            times_to_be_taken: 3,
            dosage: 500.0,
            duration_in_hours: 48,
        }
    }

    #[actix_web::test]
    async fn schedules_a_reminder_per_dose() {
        let TestContext {
            ctx,
            patient,
            doctor_id,
        } = setup().await;

        let (medication, reminders) = usecase(&patient.id, &doctor_id)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(medication.created, 1000);
        assert_eq!(reminders.len(), 6);
        assert_eq!(reminders[0].remind_at, 1000 + 8 * HOUR);
        assert_eq!(reminders[5].remind_at, 1000 + 48 * HOUR);
        assert!(reminders.iter().all(|r| {
            r.patient_mobile_number == "+2347181354770"
                && r.medication_name == "Amoxicillin"
                && r.is_for_medication(&medication.id)
                && !r.is_taken
        }));

        let stored = ctx
            .repos
            .reminders
            .find_by_medication(&medication.id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 6);
    }

    #[actix_web::test]
    async fn links_patient_and_doctor_once() {
        let TestContext {
            ctx,
            patient,
            doctor_id,
        } = setup().await;

        usecase(&patient.id, &doctor_id).execute(&ctx).await.unwrap();
        usecase(&patient.id, &doctor_id).execute(&ctx).await.unwrap();

        let relations = ctx
            .repos
            .patient_doctors
            .find_by_patient(&patient.id)
            .await
            .unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].doctor_id, doctor_id);
    }

    #[actix_web::test]
    async fn rejects_invalid_prescriptions() {
        let TestContext {
            ctx,
            patient,
            doctor_id,
        } = setup().await;

        let mut invalid = usecase(&patient.id, &doctor_id);
        invalid.times_to_be_taken = 0;
        assert_eq!(
            invalid.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidMedication(MedicationError::InvalidFrequency)
        );

        let patient_id = ID::new();
        let mut unknown_patient = usecase(&patient_id, &doctor_id);
        assert_eq!(
            unknown_patient.execute(&ctx).await.unwrap_err(),
            UseCaseError::PatientNotFound(patient_id)
        );
    }
}
