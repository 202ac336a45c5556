use crate::domain::Distance;

const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation { latitude, longitude }
    }

    /// Great-circle distance using the Haversine formula, rounded to a tenth of a mile.
    /// Coordinates are not range checked here, out of range values simply produce a number.
    pub fn distance_to(&self, other: &GeoLocation) -> Distance {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos() * other.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_miles(EARTH_RADIUS_MILES * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn distance_between_two_manhattan_coordinates() {
        let a = GeoLocation::new(40.7128, -74.0060);
        let b = GeoLocation::new(40.7168, -73.9973);

        assert_eq!(a.distance_to(&b).to_string(), "0.5");
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let a = GeoLocation::new(40.7128, -74.006);
        assert_eq!(a.distance_to(&a).miles(), 0.0);
    }

    #[test]
    fn distance_between_cities() {
        let new_york = GeoLocation::new(40.7128, -74.0060);
        let los_angeles = GeoLocation::new(34.0522, -118.2437);

        let miles = new_york.distance_to(&los_angeles).miles();
        assert!((miles - 2445.6).abs() < 1.0, "unexpected distance {}", miles);
    }

    #[rstest]
    #[case((40.7128, -74.006), (40.7168, -73.9973))]
    #[case((40.7128, -74.006), (40.7318, -73.9953))]
    #[case((51.8615899, 4.3580323), (40.7128, -74.006))]
    #[case((-33.8688, 151.2093), (35.6762, 139.6503))]
    #[case((0.0, 179.9), (0.0, -179.9))]
    #[case((89.9, 0.0), (-89.9, 180.0))]
    fn distance_is_symmetric(#[case] a: (f64, f64), #[case] b: (f64, f64)) {
        let a = GeoLocation::new(a.0, a.1);
        let b = GeoLocation::new(b.0, b.1);

        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn distance_across_the_antimeridian_takes_the_short_way() {
        let west = GeoLocation::new(0.0, 179.9);
        let east = GeoLocation::new(0.0, -179.9);

        assert!(west.distance_to(&east).miles() < 14.0);
    }
}
