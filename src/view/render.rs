use crate::catalog::Catalog;
use crate::domain::{BloodBank, DonationCamp, GeoLocation};
use crate::search::{SearchHit, search};
use crate::view::state::{Page, ViewState};

/// The lists a page shows for its current state.
#[derive(Debug)]
pub struct PageResults<'a> {
    pub blood_banks: Vec<SearchHit<'a, BloodBank>>,
    pub donation_camps: Vec<SearchHit<'a, DonationCamp>>,
}

pub fn render<'a>(catalog: &'a Catalog, state: &ViewState) -> PageResults<'a> {
    let user_location = user_location(state);

    let blood_banks = match state.page {
        Page::Banks => search(catalog.blood_banks(), &state.filter, user_location),
        Page::Nearby => Vec::new(),
    };

    PageResults {
        blood_banks,
        donation_camps: search(catalog.donation_camps(), &state.filter, user_location),
    }
}

pub fn user_location(state: &ViewState) -> Option<&GeoLocation> {
    state.user_location.as_ref().map(|resolved| &resolved.location)
}
