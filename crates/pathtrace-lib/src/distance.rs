use std::fmt;

use serde::Serialize;

use crate::graph::Weight;

/// Tentative or settled distance from the search origin.
///
/// `Unreachable` is the "infinite" sentinel: it orders after every finite
/// value and never takes part in arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(Weight),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    /// The finite value, if any.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Extend this distance by one edge. Overflow and unreachable inputs
    /// both yield `Unreachable`.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => value
                .checked_add(weight)
                .map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => f.write_str("∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_orders_after_finite() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(3) < Distance::Finite(4));
    }

    #[test]
    fn extend_does_not_wrap() {
        assert_eq!(Distance::Finite(u64::MAX).extend(1), Distance::Unreachable);
        assert_eq!(Distance::Unreachable.extend(0), Distance::Unreachable);
        assert_eq!(Distance::Finite(9).extend(5), Distance::Finite(14));
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let values = [Distance::Finite(2), Distance::Unreachable];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, "[2,null]");
    }
}
