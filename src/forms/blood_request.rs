use crate::domain::{BloodType, Notice, Urgency};
use crate::forms::{FieldError, Form, require, require_positive};

/// A new request for blood, as entered on the request board.
#[derive(Debug, Clone, Default)]
pub struct BloodRequest {
    pub patient_name: String,
    pub blood_type: String,
    pub hospital: String,
    pub location: String,
    pub urgency: String,
    pub units_needed: String,
    pub contact: String,
    pub notes: String,
}

impl BloodRequest {
    pub fn blood_type(&self) -> Option<BloodType> {
        self.blood_type.parse().ok()
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency.parse().ok()
    }
}

impl Form for BloodRequest {
    const NAME: &'static str = "blood request";

    fn validate(&self) -> Vec<(&'static str, FieldError)> {
        let mut errors = Vec::new();
        require(&mut errors, "patient_name", &self.patient_name);

        if self.blood_type.trim().is_empty() {
            errors.push(("blood_type", FieldError::Required));
        } else if let Err(err) = self.blood_type.parse::<BloodType>() {
            errors.push(("blood_type", err.into()));
        }

        require(&mut errors, "hospital", &self.hospital);
        require(&mut errors, "location", &self.location);

        if self.urgency.trim().is_empty() {
            errors.push(("urgency", FieldError::Required));
        } else if let Err(err) = self.urgency.parse::<Urgency>() {
            errors.push(("urgency", err.into()));
        }

        require_positive(&mut errors, "units_needed", &self.units_needed);
        require(&mut errors, "contact", &self.contact);
        errors
    }

    fn success_notice(&self) -> Notice {
        Notice::info(
            "Request Submitted",
            "Your blood request has been submitted successfully. Donors will be notified based on matching criteria.",
        )
    }
}
