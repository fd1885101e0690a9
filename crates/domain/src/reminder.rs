use crate::{
    medication::Medication,
    shared::entity::{Entity, ID},
};

/// A `Reminder` is a scheduled notification to a `Patient` that a dose of a
/// `Medication` is due.
///
/// The medication name, dosage and mobile number are copied onto the
/// `Reminder` when it is created so that sending the notification does not
/// need to look anything else up.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub patient_id: ID,
    pub medication_ids: Vec<ID>,
    /// The timestamp in millis at which the dose should be taken
    pub remind_at: i64,
    /// Set once by the `Patient` and never unset
    pub is_taken: bool,
    pub medication_name: String,
    pub dosage: f64,
    pub patient_mobile_number: String,
}

impl Reminder {
    pub fn for_dose(medication: &Medication, patient_mobile_number: &str, remind_at: i64) -> Self {
        Self {
            id: Default::default(),
            patient_id: medication.patient_id.clone(),
            medication_ids: vec![medication.id.clone()],
            remind_at,
            is_taken: false,
            medication_name: medication.medication_name.clone(),
            dosage: medication.dosage,
            patient_mobile_number: patient_mobile_number.to_string(),
        }
    }

    pub fn mark_taken(&mut self) {
        self.is_taken = true;
    }

    pub fn reschedule(&mut self, remind_at: i64) {
        self.remind_at = remind_at;
    }

    /// Not taken yet and still in the future
    pub fn is_pending(&self, now: i64) -> bool {
        !self.is_taken && self.remind_at >= now
    }

    pub fn is_for_medication(&self, medication_id: &ID) -> bool {
        self.medication_ids.contains(medication_id)
    }

    /// Inclusive on both ends
    pub fn is_due_within(&self, start: i64, end: i64) -> bool {
        self.remind_at >= start && self.remind_at <= end
    }

    /// Text message sent to the `Patient`
    pub fn notification_message(&self) -> String {
        format!(
            "It's time to take your drugs.\n\nMedication name: {}\n\nDosage: {}",
            self.medication_name, self.dosage
        )
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(remind_at: i64) -> Reminder {
        Reminder {
            id: Default::default(),
            patient_id: Default::default(),
            medication_ids: vec![],
            remind_at,
            is_taken: false,
            medication_name: "Amoxicillin".into(),
            dosage: 500.0,
            patient_mobile_number: "+2347181354770".into(),
        }
    }

    #[test]
    fn message_contains_medication_and_dosage() {
        let msg = reminder(0).notification_message();
        assert!(msg.contains("Amoxicillin"));
        assert!(msg.contains("500"));
        assert!(!msg.contains("500.0"));

        let mut r = reminder(0);
        r.dosage = 2.5;
        assert!(r.notification_message().contains("Dosage: 2.5"));
    }

    #[test]
    fn due_window_is_inclusive() {
        let r = reminder(100);
        assert!(r.is_due_within(100, 200));
        assert!(r.is_due_within(0, 100));
        assert!(!r.is_due_within(101, 200));
        assert!(!r.is_due_within(0, 99));
    }

    #[test]
    fn taken_is_never_reverted() {
        let mut r = reminder(100);
        assert!(r.is_pending(50));
        r.mark_taken();
        r.mark_taken();
        assert!(r.is_taken);
        assert!(!r.is_pending(50));
    }
}
