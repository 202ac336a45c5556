use crate::domain::BloodTypeFilter;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_RADIUS_MILES: f64 = 10.0;
pub const MAX_RADIUS_MILES: f64 = 50.0;

/// A search radius in miles, never negative and never above its cap.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Radius(f64);

impl Radius {
    pub fn new(miles: f64) -> Self {
        Radius::capped(miles, MAX_RADIUS_MILES)
    }

    /// A cap that is NaN or negative falls back to 50 and 0 respectively.
    pub fn capped(miles: f64, max_miles: f64) -> Self {
        let max_miles = if max_miles.is_nan() { MAX_RADIUS_MILES } else { max_miles.max(0.0) };
        if miles.is_nan() {
            return Radius(DEFAULT_RADIUS_MILES.min(max_miles));
        }
        Radius(miles.clamp(0.0, max_miles))
    }

    pub fn miles(&self) -> f64 {
        self.0
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius(DEFAULT_RADIUS_MILES)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Name,
    Date,
}

#[derive(Error, Debug, PartialEq)]
#[error("invalid sort key: '{0}', expected distance, name or date")]
pub struct InvalidSortKey(pub String);

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(SortKey::Distance),
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            _ => Err(InvalidSortKey(s.to_string())),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct FilterState {
    pub search_term: String,
    pub blood_type: BloodTypeFilter,
    pub radius: Radius,
    pub date: Option<NaiveDate>,
    pub sort_key: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 10.0)]
    #[case(0.0, 0.0)]
    #[case(-5.0, 0.0)]
    #[case(50.0, 50.0)]
    #[case(75.0, 50.0)]
    #[case(f64::NAN, DEFAULT_RADIUS_MILES)]
    fn clamps_the_radius(#[case] miles: f64, #[case] expected: f64) {
        assert_eq!(Radius::new(miles).miles(), expected);
    }

    #[rstest]
    #[case(30.0, 25.0, 25.0)]
    #[case(20.0, 25.0, 20.0)]
    #[case(f64::NAN, 5.0, 5.0)]
    #[case(10.0, -1.0, 0.0)]
    #[case(60.0, f64::NAN, 50.0)]
    fn clamps_the_radius_to_a_custom_cap(#[case] miles: f64, #[case] max_miles: f64, #[case] expected: f64) {
        assert_eq!(Radius::capped(miles, max_miles).miles(), expected);
    }

    #[rstest]
    #[case("distance", SortKey::Distance)]
    #[case("Name", SortKey::Name)]
    #[case("DATE", SortKey::Date)]
    fn parses_sort_keys(#[case] value: &str, #[case] expected: SortKey) {
        assert_eq!(value.parse::<SortKey>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_sort_keys() {
        assert_eq!("rating".parse::<SortKey>(), Err(InvalidSortKey("rating".to_string())));
    }

    #[test]
    fn defaults_match_a_fresh_page() {
        let state = FilterState::default();

        assert_eq!(state.search_term, "");
        assert_eq!(state.blood_type, BloodTypeFilter::All);
        assert_eq!(state.radius.miles(), 10.0);
        assert_eq!(state.date, None);
        assert_eq!(state.sort_key, SortKey::Distance);
    }
}
