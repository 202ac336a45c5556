use ordered_float::OrderedFloat;
use std::fmt::{Display, Formatter};

/// A distance in miles, kept at the one decimal precision it is displayed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub fn from_miles(miles: f64) -> Self {
        Distance(OrderedFloat((miles * 10.0).round() / 10.0))
    }

    pub fn miles(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_within(&self, radius_miles: f64) -> bool {
        self.miles() <= radius_miles
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.miles())
    }
}
