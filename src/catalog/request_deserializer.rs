use crate::domain::{RequestStatus, Urgency};
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| Error::invalid_value(Unexpected::Str(&value), &"High, Medium or Low"))
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        match value.to_lowercase().as_str() {
            "active" => Ok(RequestStatus::Active),
            "fulfilled" => Ok(RequestStatus::Fulfilled),
            _ => Err(Error::custom(format!("invalid request status: {}", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("Active", RequestStatus::Active)]
    #[case("fulfilled", RequestStatus::Fulfilled)]
    fn deserializes_a_status(#[case] value: &str, #[case] expected: RequestStatus) {
        assert_eq!(serde_json::from_value::<RequestStatus>(json!(value)).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("Closed"))]
    #[case(json!(1))]
    fn fails_for_an_invalid_status(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<RequestStatus>(value).is_err());
    }

    #[test]
    fn fails_for_an_invalid_urgency() {
        assert!(serde_json::from_value::<Urgency>(json!("Critical")).is_err());
    }
}
