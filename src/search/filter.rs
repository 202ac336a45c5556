use crate::domain::{BloodTypeFilter, Location};
use crate::search::filter_state::{FilterState, Radius};
use crate::search::hit::SearchHit;
use chrono::NaiveDate;

/// All filters of the search form, combined with AND.
pub fn passes<T: Location>(hit: &SearchHit<T>, filter: &FilterState) -> bool {
    matches_text(hit.location, &filter.search_term)
        && matches_blood_type(hit.location, filter.blood_type)
        && within_radius(hit, filter.radius)
        && on_or_after(hit.location, filter.date)
}

/// Case-insensitive substring match on any of the searchable fields.
pub fn matches_text<T: Location>(location: &T, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let term = search_term.to_lowercase();
    location.search_fields().iter().any(|field| field.to_lowercase().contains(&term))
}

/// Only locations that track availability are filtered, others always pass.
pub fn matches_blood_type<T: Location>(location: &T, filter: BloodTypeFilter) -> bool {
    match (filter, location.availability()) {
        (BloodTypeFilter::All, _) => true,
        (BloodTypeFilter::Only(_), None) => true,
        (BloodTypeFilter::Only(blood_type), Some(availability)) => availability.is_sufficient(blood_type),
    }
}

/// A hit without a distance means the user location is unknown and the radius does not apply.
pub fn within_radius<T: Location>(hit: &SearchHit<T>, radius: Radius) -> bool {
    hit.distance.is_none_or(|distance| distance.is_within(radius.miles()))
}

/// Compares calendar dates only, locations without a date always pass.
pub fn on_or_after<T: Location>(location: &T, date: Option<NaiveDate>) -> bool {
    match (date, location.date()) {
        (Some(from), Some(location_date)) => location_date >= from,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{BloodType, GeoLocation};
    use rstest::rstest;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[rstest]
    #[case("", true)]
    #[case("memorial", true)]
    #[case("MEMORIAL", true)]
    #[case("park avenue", true)]
    #[case("midtown", true)]
    #[case("downtown", false)]
    #[case("Red Cross", false)]
    fn matches_bank_text(#[case] term: &str, #[case] expected: bool) {
        let catalog = catalog();
        let memorial = &catalog.blood_banks()[1];

        assert_eq!(matches_text(memorial, term), expected);
    }

    #[test]
    fn matches_camp_organizer() {
        let catalog = catalog();
        let community_center = &catalog.donation_camps()[0];

        assert!(matches_text(community_center, "red cross"));
        assert!(!matches_text(community_center, "blood alliance"));
    }

    #[rstest]
    #[case(BloodTypeFilter::All, true)]
    #[case(BloodTypeFilter::Only(BloodType::OPositive), true)]
    #[case(BloodTypeFilter::Only(BloodType::APositive), true)]
    #[case(BloodTypeFilter::Only(BloodType::ANegative), false)]
    #[case(BloodTypeFilter::Only(BloodType::AbPositive), false)]
    fn filters_banks_on_sufficient_stock(#[case] filter: BloodTypeFilter, #[case] expected: bool) {
        let catalog = catalog();
        let memorial = &catalog.blood_banks()[1];

        assert_eq!(matches_blood_type(memorial, filter), expected);
    }

    #[test]
    fn blood_type_filter_does_not_apply_to_camps() {
        let catalog = catalog();

        for blood_type in BloodType::all() {
            assert!(matches_blood_type(&catalog.donation_camps()[0], BloodTypeFilter::Only(blood_type)));
        }
    }

    #[rstest]
    #[case("2025-06-01", "2025-05-15", false)]
    #[case("2025-06-01", "2025-06-05", true)]
    #[case("2025-06-05", "2025-06-05", true)]
    fn filters_camps_by_date(#[case] from: &str, #[case] camp_date: &str, #[case] expected: bool) {
        let catalog = catalog();
        let mut camp = catalog.donation_camps()[0].clone();
        camp.date = camp_date.parse().unwrap();

        assert_eq!(on_or_after(&camp, Some(from.parse().unwrap())), expected);
    }

    #[test]
    fn date_filter_does_not_apply_to_banks() {
        let catalog = catalog();
        let far_future = NaiveDate::from_ymd_opt(2099, 1, 1);

        assert!(on_or_after(&catalog.blood_banks()[0], far_future));
    }

    #[test]
    fn radius_only_applies_with_a_known_distance() {
        let catalog = catalog();
        let university = &catalog.blood_banks()[2];

        let unknown = SearchHit::annotate(university, None);
        assert!(within_radius(&unknown, Radius::new(0.0)));

        let user = GeoLocation::new(40.7128, -74.006);
        let known = SearchHit::annotate(university, Some(&user));
        assert!(!within_radius(&known, Radius::new(1.0)));
        assert!(within_radius(&known, Radius::new(1.3)));
    }
}
