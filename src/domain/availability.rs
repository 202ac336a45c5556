use crate::domain::BloodType;
use std::collections::HashMap;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Availability {
    High,
    Medium,
    Low,
}

impl Availability {
    /// Whether a bank with this stock level is worth visiting for the blood type.
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Availability::High | Availability::Medium)
    }
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct AvailabilityMap(HashMap<BloodType, Availability>);

impl AvailabilityMap {
    pub fn get(&self, blood_type: BloodType) -> Option<Availability> {
        self.0.get(&blood_type).copied()
    }

    pub fn is_sufficient(&self, blood_type: BloodType) -> bool {
        self.get(blood_type).is_some_and(|availability| availability.is_sufficient())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(BloodType, Availability)> for AvailabilityMap {
    fn from_iter<T: IntoIterator<Item = (BloodType, Availability)>>(iter: T) -> Self {
        AvailabilityMap(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Availability::High, true)]
    #[case(Availability::Medium, true)]
    #[case(Availability::Low, false)]
    fn sufficient_levels(#[case] availability: Availability, #[case] expected: bool) {
        assert_eq!(availability.is_sufficient(), expected);
    }

    #[test]
    fn missing_blood_type_is_not_sufficient() {
        let map = AvailabilityMap::from_iter([(BloodType::APositive, Availability::High)]);

        assert!(map.is_sufficient(BloodType::APositive));
        assert!(!map.is_sufficient(BloodType::ONegative));
    }
}
