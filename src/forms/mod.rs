mod appointment;
mod blood_request;
mod camp_host;
mod donor_registration;
mod signup;

pub use appointment::AppointmentRequest;
pub use blood_request::BloodRequest;
pub use camp_host::{CampHostRegistration, ORGANIZATION_TYPES};
pub use donor_registration::DonorRegistration;
pub use signup::SignupForm;

use crate::domain::{InvalidBloodType, InvalidUrgency, Notice};
use thiserror::Error;
use tracing::{info, warn};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error(transparent)]
    InvalidBloodType(#[from] InvalidBloodType),
    #[error(transparent)]
    InvalidUrgency(#[from] InvalidUrgency),
    #[error("please pick one of the listed options")]
    UnknownOption,
    #[error("please enter a whole number of at least 1")]
    NotAPositiveNumber,
    #[error("you must agree before continuing")]
    NotAccepted,
}

#[derive(Error, Debug, PartialEq, Clone)]
#[error("{} field(s) need attention", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<(&'static str, FieldError)>,
}

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|(name, _)| *name == field).map(|(_, error)| error)
    }
}

/// A form that is checked locally before it is accepted. Nothing is sent anywhere.
pub trait Form {
    const NAME: &'static str;

    fn validate(&self) -> Vec<(&'static str, FieldError)>;

    fn success_notice(&self) -> Notice;

    fn submit(&self) -> Result<Notice, ValidationErrors> {
        let errors = self.validate();
        if errors.is_empty() {
            info!("📝 Accepted {} form", Self::NAME);
            Ok(self.success_notice())
        } else {
            warn!("⚠️ Rejected {} form, {} invalid field(s)", Self::NAME, errors.len());
            Err(ValidationErrors { errors })
        }
    }
}

fn require(errors: &mut Vec<(&'static str, FieldError)>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push((field, FieldError::Required));
    }
}

/// Checks a required count, such as units of blood or expected donors.
fn require_positive(errors: &mut Vec<(&'static str, FieldError)>, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push((field, FieldError::Required));
    } else if !value.parse::<u32>().is_ok_and(|count| count >= 1) {
        errors.push((field, FieldError::NotAPositiveNumber));
    }
}

fn require_email(errors: &mut Vec<(&'static str, FieldError)>, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push((field, FieldError::Required));
        return;
    }

    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !valid {
        errors.push((field, FieldError::InvalidEmail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("donor@example.com", None)]
    #[case("  donor@example.com ", None)]
    #[case("", Some(FieldError::Required))]
    #[case("   ", Some(FieldError::Required))]
    #[case("donor", Some(FieldError::InvalidEmail))]
    #[case("@example.com", Some(FieldError::InvalidEmail))]
    #[case("donor@", Some(FieldError::InvalidEmail))]
    #[case("a@b@c", Some(FieldError::InvalidEmail))]
    fn validates_emails(#[case] email: &str, #[case] expected: Option<FieldError>) {
        let mut errors = Vec::new();
        require_email(&mut errors, "email", email);

        assert_eq!(errors.first().map(|(_, error)| error.clone()), expected);
    }

    #[rstest]
    #[case("3", None)]
    #[case(" 12 ", None)]
    #[case("", Some(FieldError::Required))]
    #[case("0", Some(FieldError::NotAPositiveNumber))]
    #[case("-2", Some(FieldError::NotAPositiveNumber))]
    #[case("2.5", Some(FieldError::NotAPositiveNumber))]
    #[case("many", Some(FieldError::NotAPositiveNumber))]
    fn validates_counts(#[case] value: &str, #[case] expected: Option<FieldError>) {
        let mut errors = Vec::new();
        require_positive(&mut errors, "units_needed", value);

        assert_eq!(errors.first().map(|(_, error)| error.clone()), expected);
    }
}
