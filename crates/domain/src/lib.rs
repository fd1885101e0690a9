mod doctor;
mod medication;
mod mobile_number;
mod otp;
mod password;
mod patient;
mod patient_doctor;
mod profile;
mod reminder;
mod role;
mod shared;
mod user_account;

pub use doctor::Doctor;
pub use medication::{Medication, MedicationError, MAX_DOSES_PER_COURSE};
pub use mobile_number::{parse_mobile_number, MobileNumberError};
pub use otp::{Otp, OTP_LEN};
pub use password::{PasswordError, PasswordHash};
pub use patient::Patient;
pub use patient_doctor::PatientDoctor;
pub use profile::{is_valid_email, normalize_email, Profile, ProfileUpdate};
pub use reminder::Reminder;
pub use role::UserRole;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user_account::UserAccount;
