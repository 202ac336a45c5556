use crate::domain::{BloodType, Notice};
use crate::forms::{FieldError, Form, require, require_email};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct DonorRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_group: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub medical_history: String,
    pub last_donation: Option<NaiveDate>,
    pub consent: bool,
    pub notifications: bool,
}

impl DonorRegistration {
    pub fn blood_type(&self) -> Option<BloodType> {
        self.blood_group.parse().ok()
    }
}

impl Form for DonorRegistration {
    const NAME: &'static str = "donor registration";

    fn validate(&self) -> Vec<(&'static str, FieldError)> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "phone", &self.phone);

        if self.blood_group.trim().is_empty() {
            errors.push(("blood_group", FieldError::Required));
        } else if let Err(err) = self.blood_group.parse::<BloodType>() {
            errors.push(("blood_group", err.into()));
        }

        require(&mut errors, "address", &self.address);
        require(&mut errors, "city", &self.city);
        require(&mut errors, "state", &self.state);
        require(&mut errors, "zip_code", &self.zip_code);

        if !self.consent {
            errors.push(("consent", FieldError::NotAccepted));
        }
        errors
    }

    fn success_notice(&self) -> Notice {
        Notice::info("Registration Successful", "Thank you for registering as a blood donor!")
    }
}
