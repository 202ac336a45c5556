use crate::domain::location::{Location, LocationId, LocationKind};
use crate::domain::{AvailabilityMap, GeoLocation};

#[derive(PartialEq, Debug, Clone)]
pub struct BloodBank {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub location: GeoLocation,
    pub availability: AvailabilityMap,
}

impl Location for BloodBank {
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
        LocationKind::BloodBank
    }

    fn availability(&self) -> Option<&AvailabilityMap> {
        Some(&self.availability)
    }

    fn details(&self) -> Vec<String> {
        vec![format!("Hours: {}", self.hours), format!("Phone: {}", self.phone)]
    }
}
