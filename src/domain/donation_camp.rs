use crate::domain::GeoLocation;
use crate::domain::location::{Location, LocationId, LocationKind};
use chrono::NaiveDate;

#[derive(PartialEq, Debug, Clone)]
pub struct DonationCamp {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub date: NaiveDate,
    pub time: String,
    pub organizer: String,
    pub location: GeoLocation,
}

impl Location for DonationCamp {
    fn id(&self) -> LocationId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn geo_location(&self) -> &GeoLocation {
        &self.location
    }

    fn kind(&self) -> LocationKind {
        LocationKind::DonationCamp
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str(), self.organizer.as_str()]
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn details(&self) -> Vec<String> {
        vec![
            format!("Date: {}", self.date.format("%-m/%-d/%Y")),
            format!("Time: {}", self.time),
            format!("Organizer: {}", self.organizer),
        ]
    }
}
