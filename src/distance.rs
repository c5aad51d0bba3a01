use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Shortest distance to a vertex
///
/// `Unreachable` is its own state rather than a large number, so it can never
/// be confused with a real path weight. It sorts after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

impl<W: Ord> PartialOrd for Distance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for Distance<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Ordering::Less,
            (Distance::Unreachable, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Unreachable, Distance::Unreachable) => Ordering::Equal,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

// JSON has no infinity, so unreachable becomes null
impl<W: Serialize> Serialize for Distance<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(w) => serializer.serialize_some(w),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_prints_as_inf() {
        assert_eq!(Distance::<u64>::Unreachable.to_string(), "inf");
        assert_eq!(Distance::Finite(42u64).to_string(), "42");
    }

    #[test]
    fn unreachable_sorts_after_any_finite_distance() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(1u64) < Distance::Finite(2));
    }

    #[test]
    fn serializes_to_number_or_null() {
        assert_eq!(serde_json::to_string(&Distance::Finite(3u64)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Distance::<u64>::Unreachable).unwrap(), "null");
    }
}
