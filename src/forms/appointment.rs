use crate::domain::{BloodType, Location, LocationId, LocationKind, Notice};
use crate::forms::{FieldError, Form, require, require_email};
use chrono::NaiveDate;

/// A donation appointment at a blood bank or a registration for a camp.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub location_id: LocationId,
    pub kind: LocationKind,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub blood_type: String,
}

impl AppointmentRequest {
    /// An empty request for the given location, a camp brings its own date.
    pub fn at(location: &impl Location) -> Self {
        AppointmentRequest {
            location_id: location.id(),
            kind: location.kind(),
            date: location.date(),
            time: String::new(),
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            blood_type: String::new(),
        }
    }
}

impl Form for AppointmentRequest {
    const NAME: &'static str = "appointment";

    fn validate(&self) -> Vec<(&'static str, FieldError)> {
        let mut errors = Vec::new();
        // Camps run at a fixed date and time, only banks let the donor pick a slot.
        if self.kind == LocationKind::BloodBank {
            if self.date.is_none() {
                errors.push(("date", FieldError::Required));
            }
            require(&mut errors, "time", &self.time);
        }
        require(&mut errors, "name", &self.name);
        require(&mut errors, "phone", &self.phone);
        require_email(&mut errors, "email", &self.email);

        if !self.blood_type.trim().is_empty() {
            if let Err(err) = self.blood_type.parse::<BloodType>() {
                errors.push(("blood_type", err.into()));
            }
        }
        errors
    }

    fn success_notice(&self) -> Notice {
        Notice::info("Appointment Scheduled", "Your donation appointment has been scheduled successfully.")
    }
}
