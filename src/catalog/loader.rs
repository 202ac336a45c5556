use crate::catalog::serialized::{SerializedBloodBank, SerializedDonationCamp};
use crate::domain::{BloodBank, DonationCamp, Location};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, instrument};

const BLOOD_BANKS_JSON: &str = include_str!("../../resources/blood_banks.json");
const DONATION_CAMPS_JSON: &str = include_str!("../../resources/donation_camps.json");

/// The immutable set of records every search starts from.
#[derive(Debug, Clone)]
pub struct Catalog {
    blood_banks: Vec<BloodBank>,
    donation_camps: Vec<DonationCamp>,
}

impl Catalog {
    /// Loads the records compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Catalog::from_json(BLOOD_BANKS_JSON, DONATION_CAMPS_JSON)
    }

    #[instrument(skip_all)]
    pub fn from_json(blood_banks_json: &str, donation_camps_json: &str) -> Result<Self, CatalogError> {
        info!("📚 Loading catalog...");
        let blood_banks = parse::<SerializedBloodBank, BloodBank>(blood_banks_json, "blood banks")?;
        let donation_camps = parse::<SerializedDonationCamp, DonationCamp>(donation_camps_json, "donation camps")?;

        ensure_unique_ids(&blood_banks, Location::id, "blood banks")?;
        ensure_unique_ids(&donation_camps, Location::id, "donation camps")?;

        info!(
            "📚 Loading catalog... OK, {} blood banks, {} donation camps",
            blood_banks.len(),
            donation_camps.len()
        );
        Ok(Catalog {
            blood_banks,
            donation_camps,
        })
    }

    pub fn blood_banks(&self) -> &[BloodBank] {
        &self.blood_banks
    }

    pub fn donation_camps(&self) -> &[DonationCamp] {
        &self.donation_camps
    }
}

pub(super) fn parse<S, T>(json: &str, collection: &'static str) -> Result<Vec<T>, CatalogError>
where
    S: DeserializeOwned,
    T: From<S>,
{
    let serialized: Vec<S> = serde_json::from_str(json).map_err(|source| CatalogError::Json { source, collection })?;
    Ok(serialized.into_iter().map(T::from).collect())
}

pub(super) fn ensure_unique_ids<T>(
    records: &[T],
    id: impl Fn(&T) -> u32,
    collection: &'static str,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::<u32>::new();
    match records.iter().find(|record| !seen.insert(id(record))) {
        Some(duplicate) => Err(CatalogError::DuplicateId {
            id: id(duplicate),
            collection,
        }),
        None => Ok(()),
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid {collection}: {source}")]
    Json {
        source: serde_json::Error,
        collection: &'static str,
    },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { id: u32, collection: &'static str },
}
