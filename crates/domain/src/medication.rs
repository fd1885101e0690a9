use crate::shared::entity::{Entity, ID};
use thiserror::Error;

const HOUR_MILLIS: i64 = 1000 * 60 * 60;
const DAY_MILLIS: i64 = HOUR_MILLIS * 24;
/// Upper bound on the number of doses of one course, which is also the
/// number of `Reminder`s generated for it
pub const MAX_DOSES_PER_COURSE: usize = 1000;

/// A drug prescribed by a `Doctor` to a `Patient`
#[derive(Debug, Clone)]
pub struct Medication {
    pub id: ID,
    pub patient_id: ID,
    pub doctor_id: ID,
    pub medication_name: String,
    pub diagnosis: String,
    /// Number of doses per day
    pub times_to_be_taken: i64,
    pub dosage: f64,
    /// Length of the whole course, counted from `created`
    pub duration_in_hours: i64,
    pub is_completed: bool,
    pub created: i64,
}

#[derive(Error, Debug, PartialEq)]
pub enum MedicationError {
    #[error("Medication name can not be empty")]
    EmptyName,
    #[error("A medication has to be taken at least once a day")]
    InvalidFrequency,
    #[error("Dosage has to be a positive number")]
    InvalidDosage,
    #[error("Duration has to be at least one hour")]
    InvalidDuration,
    #[error("The course has more than {0} doses")]
    TooManyDoses(usize),
}

impl Medication {
    pub fn validate(&self) -> Result<(), MedicationError> {
        if self.medication_name.trim().is_empty() {
            return Err(MedicationError::EmptyName);
        }
        if self.times_to_be_taken < 1 {
            return Err(MedicationError::InvalidFrequency);
        }
        if !(self.dosage.is_finite() && self.dosage > 0.0) {
            return Err(MedicationError::InvalidDosage);
        }
        if self.duration_in_hours < 1 {
            return Err(MedicationError::InvalidDuration);
        }
        let doses = self.duration_in_hours.saturating_mul(self.times_to_be_taken) / 24;
        if doses > MAX_DOSES_PER_COURSE as i64 {
            return Err(MedicationError::TooManyDoses(MAX_DOSES_PER_COURSE));
        }
        Ok(())
    }

    /// Millis between two doses, the day split evenly in `times_to_be_taken`
    pub fn dose_interval_millis(&self) -> i64 {
        DAY_MILLIS / self.times_to_be_taken.max(1)
    }

    pub fn course_end(&self) -> i64 {
        self.created + self.duration_in_hours * HOUR_MILLIS
    }

    /// Timestamps of the doses after `from` (exclusive).
    ///
    /// The first dose is one interval after the medication was prescribed and
    /// doses keep coming every interval until the end of the course (inclusive).
    pub fn dose_times_after(&self, from: i64) -> Vec<i64> {
        let interval = self.dose_interval_millis();
        let course_end = self.course_end();

        let mut doses = Vec::new();
        let mut dose = self.created + interval;
        while dose <= course_end && doses.len() < MAX_DOSES_PER_COURSE {
            if dose > from {
                doses.push(dose);
            }
            dose += interval;
        }
        doses
    }

    pub fn complete(&mut self) {
        self.is_completed = true;
    }
}

impl Entity for Medication {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medication(times_to_be_taken: i64, duration_in_hours: i64) -> Medication {
        Medication {
            id: Default::default(),
            patient_id: Default::default(),
            doctor_id: Default::default(),
            medication_name: "Amoxicillin".into(),
            diagnosis: "Chest infection".into(),
            times_to_be_taken,
            dosage: 500.0,
            duration_in_hours,
            is_completed: false,
            created: 0,
        }
    }

    #[test]
    fn splits_the_day_between_doses() {
        let m = medication(3, 24);
        assert_eq!(m.dose_interval_millis(), 8 * HOUR_MILLIS);
        assert_eq!(
            m.dose_times_after(0),
            vec![8 * HOUR_MILLIS, 16 * HOUR_MILLIS, 24 * HOUR_MILLIS]
        );
    }

    #[test]
    fn skips_doses_that_are_not_after_from() {
        let m = medication(2, 48);
        assert_eq!(
            m.dose_times_after(24 * HOUR_MILLIS),
            vec![36 * HOUR_MILLIS, 48 * HOUR_MILLIS]
        );
        assert!(m.dose_times_after(48 * HOUR_MILLIS).is_empty());
    }

    #[test]
    fn short_course_can_have_no_doses() {
        let m = medication(1, 12);
        assert!(m.dose_times_after(0).is_empty());
    }

    #[test]
    fn validates_prescription() {
        assert!(medication(3, 24).validate().is_ok());
        assert_eq!(
            medication(0, 24).validate(),
            Err(MedicationError::InvalidFrequency)
        );
        assert_eq!(
            medication(3, 0).validate(),
            Err(MedicationError::InvalidDuration)
        );
        assert_eq!(
            medication(24, 24 * 365).validate(),
            Err(MedicationError::TooManyDoses(MAX_DOSES_PER_COURSE))
        );

        let mut m = medication(3, 24);
        m.dosage = -1.0;
        assert_eq!(m.validate(), Err(MedicationError::InvalidDosage));
        m.dosage = 1.0;
        m.medication_name = "  ".into();
        assert_eq!(m.validate(), Err(MedicationError::EmptyName));
    }
}
