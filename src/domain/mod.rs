mod availability;
mod blood_bank;
mod blood_request;
mod blood_type;
mod distance;
mod donation_camp;
mod geo_location;
pub mod location;
mod notice;

pub use availability::{Availability, AvailabilityMap};
pub use blood_bank::BloodBank;
pub use blood_request::{InvalidUrgency, PostedRequest, RequestId, RequestStatus, Urgency};
pub use blood_type::{BloodType, BloodTypeFilter, InvalidBloodType};
pub use distance::Distance;
pub use donation_camp::DonationCamp;
pub use geo_location::GeoLocation;
pub use location::{Location, LocationId, LocationKind};
pub use notice::Notice;
