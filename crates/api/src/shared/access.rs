use super::auth::AuthenticatedUser;
use medtrack_domain::{Medication, ID};
use medtrack_infra::MedtrackContext;

/// The owning patient and the prescribing doctor can see a medication
pub fn can_read_medication(user: &AuthenticatedUser, medication: &Medication) -> bool {
    if user.is_doctor() {
        user.id == medication.doctor_id
    } else {
        user.id == medication.patient_id
    }
}

/// Reminders of a patient are managed by the patient and the doctors treating them
pub async fn can_manage_reminders_of(
    user: &AuthenticatedUser,
    patient_id: &ID,
    ctx: &MedtrackContext,
) -> bool {
    if user.is_patient() {
        return &user.id == patient_id;
    }
    ctx.repos
        .patient_doctors
        .find(patient_id, &user.id)
        .await
        .is_some()
}
