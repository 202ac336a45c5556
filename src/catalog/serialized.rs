use crate::domain::{
    AvailabilityMap, BloodBank, BloodType, DonationCamp, GeoLocation, LocationId, PostedRequest, RequestId, RequestStatus,
    Urgency,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SerializedBloodBank {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub location: GeoLocation,
    pub availability: AvailabilityMap,
}

impl From<SerializedBloodBank> for BloodBank {
    fn from(value: SerializedBloodBank) -> Self {
        BloodBank {
            id: value.id,
            name: value.name,
            address: value.address,
            phone: value.phone,
            hours: value.hours,
            location: value.location,
            availability: value.availability,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SerializedDonationCamp {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    #[serde(deserialize_with = "super::date_deserializer::deserialize")]
    pub date: NaiveDate,
    pub time: String,
    pub organizer: String,
    pub location: GeoLocation,
}

impl From<SerializedDonationCamp> for DonationCamp {
    fn from(value: SerializedDonationCamp) -> Self {
        DonationCamp {
            id: value.id,
            name: value.name,
            address: value.address,
            date: value.date,
            time: value.time,
            organizer: value.organizer,
            location: value.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SerializedPostedRequest {
    pub id: RequestId,
    pub patient_name: String,
    pub blood_type: BloodType,
    pub hospital: String,
    pub area: String,
    pub urgency: Urgency,
    pub units_needed: u32,
    #[serde(deserialize_with = "super::date_deserializer::deserialize")]
    pub request_date: NaiveDate,
    pub status: RequestStatus,
    pub contact: String,
    #[serde(default)]
    pub notes: String,
}

impl From<SerializedPostedRequest> for PostedRequest {
    fn from(value: SerializedPostedRequest) -> Self {
        PostedRequest {
            id: value.id,
            patient_name: value.patient_name,
            blood_type: value.blood_type,
            hospital: value.hospital,
            area: value.area,
            urgency: value.urgency,
            units_needed: value.units_needed,
            request_date: value.request_date,
            status: value.status,
            contact: value.contact,
            notes: value.notes,
        }
    }
}
