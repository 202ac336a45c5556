use chrono::NaiveDate;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// Reads a calendar date in `YYYY-MM-DD` form.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"a date in YYYY-MM-DD format"))
}
