use crate::domain::{Availability, AvailabilityMap, BloodType};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

impl<'de> Deserialize<'de> for BloodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"a blood type such as A+, AB- or O+"))
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.to_lowercase().as_str() {
            "high" => Ok(Availability::High),
            "medium" => Ok(Availability::Medium),
            "low" => Ok(Availability::Low),
            _ => Err(Error::custom(format!("invalid availability: {}", value))),
        }
    }
}

impl<'de> Deserialize<'de> for AvailabilityMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<BloodType, Availability>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("High", Availability::High)]
    #[case("medium", Availability::Medium)]
    #[case("LOW", Availability::Low)]
    fn deserializes_availability(#[case] value: &str, #[case] expected: Availability) {
        let result = serde_json::from_value::<Availability>(json!(value)).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn fails_for_an_unknown_availability() {
        assert!(serde_json::from_value::<Availability>(json!("Plenty")).is_err());
    }

    #[test]
    fn deserializes_an_availability_map() {
        let result = serde_json::from_value::<AvailabilityMap>(json!({ "A+": "High", "O-": "Low" })).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.get(BloodType::APositive), Some(Availability::High));
        assert_eq!(result.get(BloodType::ONegative), Some(Availability::Low));
        assert_eq!(result.get(BloodType::BPositive), None);
    }

    #[test]
    fn fails_for_an_unknown_blood_type_key() {
        assert!(serde_json::from_value::<AvailabilityMap>(json!({ "C+": "High" })).is_err());
    }
}
