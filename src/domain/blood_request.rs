use crate::domain::BloodType;
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

pub type RequestId = u32;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

#[derive(Error, Debug, PartialEq, Clone)]
#[error("invalid urgency: '{0}', expected high, medium or low")]
pub struct InvalidUrgency(pub String);

impl FromStr for Urgency {
    type Err = InvalidUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            "low" => Ok(Urgency::Low),
            _ => Err(InvalidUrgency(s.to_string())),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RequestStatus {
    Active,
    Fulfilled,
}

/// A request for blood posted on the request board.
#[derive(PartialEq, Debug, Clone)]
pub struct PostedRequest {
    pub id: RequestId,
    pub patient_name: String,
    pub blood_type: BloodType,
    pub hospital: String,
    pub area: String,
    pub urgency: Urgency,
    pub units_needed: u32,
    pub request_date: NaiveDate,
    pub status: RequestStatus,
    pub contact: String,
    pub notes: String,
}

impl PostedRequest {
    /// Donors can only respond while the request is still open.
    pub fn accepts_responses(&self) -> bool {
        self.status == RequestStatus::Active
    }
}
