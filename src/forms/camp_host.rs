use crate::domain::Notice;
use crate::forms::{FieldError, Form, require, require_email, require_positive};
use chrono::NaiveDate;

/// The organization types a camp host can pick from.
pub const ORGANIZATION_TYPES: [&str; 7] = ["hospital", "corporate", "educational", "ngo", "government", "religious", "other"];

/// An organization's application to host a donation camp.
#[derive(Debug, Clone, Default)]
pub struct CampHostRegistration {
    pub organization_name: String,
    pub organization_type: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub camp_date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub expected_donors: String,
    pub facilities: String,
    pub additional_info: String,
    pub agree_terms: bool,
}

impl Form for CampHostRegistration {
    const NAME: &'static str = "camp host registration";

    fn validate(&self) -> Vec<(&'static str, FieldError)> {
        let mut errors = Vec::new();
        require(&mut errors, "organization_name", &self.organization_name);

        let organization_type = self.organization_type.trim();
        if organization_type.is_empty() {
            errors.push(("organization_type", FieldError::Required));
        } else if !ORGANIZATION_TYPES.contains(&organization_type) {
            errors.push(("organization_type", FieldError::UnknownOption));
        }

        require(&mut errors, "contact_name", &self.contact_name);
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "phone", &self.phone);
        require(&mut errors, "address", &self.address);
        require(&mut errors, "city", &self.city);
        require(&mut errors, "state", &self.state);
        require(&mut errors, "zip_code", &self.zip_code);

        if self.camp_date.is_none() {
            errors.push(("camp_date", FieldError::Required));
        }
        require(&mut errors, "start_time", &self.start_time);
        require(&mut errors, "end_time", &self.end_time);
        require_positive(&mut errors, "expected_donors", &self.expected_donors);
        require(&mut errors, "facilities", &self.facilities);

        if !self.agree_terms {
            errors.push(("agree_terms", FieldError::NotAccepted));
        }
        errors
    }

    fn success_notice(&self) -> Notice {
        Notice::info(
            "Camp Registration Successful",
            "Your blood donation camp has been registered successfully.",
        )
    }
}
