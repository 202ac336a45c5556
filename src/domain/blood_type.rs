use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodType {
    pub fn all() -> [BloodType; 8] {
        use BloodType::*;
        [APositive, ANegative, BPositive, BNegative, AbPositive, AbNegative, OPositive, ONegative]
    }

    pub fn code(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl Display for BloodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
#[error("invalid blood type: '{0}'")]
pub struct InvalidBloodType(pub String);

impl FromStr for BloodType {
    type Err = InvalidBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::all()
            .into_iter()
            .find(|blood_type| blood_type.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidBloodType(s.to_string()))
    }
}

/// The blood type selection of the search form, "all" disables the filter.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum BloodTypeFilter {
    #[default]
    All,
    Only(BloodType),
}

impl BloodTypeFilter {
    pub fn admits(&self, blood_type: BloodType) -> bool {
        match self {
            BloodTypeFilter::All => true,
            BloodTypeFilter::Only(wanted) => *wanted == blood_type,
        }
    }
}

impl FromStr for BloodTypeFilter {
    type Err = InvalidBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(BloodTypeFilter::All),
            code => code.parse().map(BloodTypeFilter::Only),
        }
    }
}
