use crate::domain::{AvailabilityMap, GeoLocation};
use chrono::NaiveDate;
use std::fmt::Debug;

pub type LocationId = u32;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LocationKind {
    BloodBank,
    DonationCamp,
}

/// A static record that can be searched for and shown on the map.
pub trait Location: Debug + Send + Sync {
    fn id(&self) -> LocationId;
    fn name(&self) -> &str;
    fn address(&self) -> &str;
    fn geo_location(&self) -> &GeoLocation;
    fn kind(&self) -> LocationKind;

    /// The fields a free text search matches against.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name(), self.address()]
    }

    /// Stock per blood type, `None` for kinds that do not track it.
    fn availability(&self) -> Option<&AvailabilityMap> {
        None
    }

    fn date(&self) -> Option<NaiveDate> {
        None
    }

    /// Extra lines for the map popup, after name, address and distance.
    fn details(&self) -> Vec<String>;
}
