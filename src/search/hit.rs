use crate::domain::{Distance, GeoLocation, Location};

/// A record that made it through the pipeline, with its distance to the user when known.
#[derive(Debug)]
pub struct SearchHit<'a, T: Location> {
    pub location: &'a T,
    pub distance: Option<Distance>,
}

impl<'a, T: Location> SearchHit<'a, T> {
    pub fn annotate(location: &'a T, user_location: Option<&GeoLocation>) -> Self {
        SearchHit {
            location,
            distance: user_location.map(|user| user.distance_to(location.geo_location())),
        }
    }
}

impl<T: Location> Clone for SearchHit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Location> Copy for SearchHit<'_, T> {}
