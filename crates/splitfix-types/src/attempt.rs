use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Time;

/// Identifier of the attempt a history sample came from.
///
/// Raw indices `>= 1` refer to real recorded attempts; indices `<= 0` mark
/// samples fabricated by history synthesis. The tag makes the distinction
/// explicit while the ordering stays the raw-integer ordering, so synthetic
/// samples always sort below every real one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AttemptIndex {
    /// Fabricated sample; raw value is `<= 0`.
    Synthetic(i32),
    /// Sample recorded by a real attempt; raw value is `>= 1`.
    Real(i32),
}

impl AttemptIndex {
    /// Build the normalized variant for a raw index.
    pub fn from_raw(raw: i32) -> Self {
        if raw <= 0 {
            AttemptIndex::Synthetic(raw)
        } else {
            AttemptIndex::Real(raw)
        }
    }

    /// The raw integer index.
    pub fn raw(&self) -> i32 {
        match *self {
            AttemptIndex::Synthetic(raw) => raw,
            AttemptIndex::Real(raw) => raw,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, AttemptIndex::Synthetic(_))
    }
}

impl From<i32> for AttemptIndex {
    fn from(raw: i32) -> Self {
        AttemptIndex::from_raw(raw)
    }
}

impl From<AttemptIndex> for i32 {
    fn from(index: AttemptIndex) -> i32 {
        index.raw()
    }
}

// Equality, ordering, and hashing all go through the raw value so that a
// hand-constructed mis-tagged variant still compares consistently.
impl PartialEq for AttemptIndex {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for AttemptIndex {}

impl Hash for AttemptIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

impl Ord for AttemptIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw().cmp(&other.raw())
    }
}

impl PartialOrd for AttemptIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One history sample: a duration pair tagged with the attempt it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedTime {
    pub time: Time,
    pub index: AttemptIndex,
}

impl IndexedTime {
    pub fn new(time: Time, index: AttemptIndex) -> Self {
        Self { time, index }
    }
}

/// Bookkeeping record for one real attempt.
///
/// Only `index` participates in reconciliation (it bounds the dangling-
/// history scan); the rest is carried for the surrounding run-management
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub index: i32,
    /// Final time of the attempt, if it finished.
    pub time: Time,
    /// When the attempt started, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,
    /// When the attempt ended, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<DateTime<Utc>>,
}

impl Attempt {
    pub fn new(index: i32, time: Time) -> Self {
        Self {
            index,
            time,
            started: None,
            ended: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_normalizes_variant() {
        assert!(AttemptIndex::from_raw(0).is_synthetic());
        assert!(AttemptIndex::from_raw(-3).is_synthetic());
        assert!(!AttemptIndex::from_raw(1).is_synthetic());
    }

    #[test]
    fn test_synthetic_sorts_below_real() {
        let mut indices = vec![
            AttemptIndex::from_raw(2),
            AttemptIndex::from_raw(-1),
            AttemptIndex::from_raw(1),
            AttemptIndex::from_raw(0),
        ];
        indices.sort();
        let raws: Vec<i32> = indices.iter().map(|i| i.raw()).collect();
        assert_eq!(raws, vec![-1, 0, 1, 2]);
    }

    #[test]
    fn test_serializes_as_raw_integer() {
        let json = serde_json::to_value(AttemptIndex::from_raw(-2)).unwrap();
        assert_eq!(json, serde_json::json!(-2));
        let back: AttemptIndex = serde_json::from_value(json).unwrap();
        assert!(back.is_synthetic());
        assert_eq!(back.raw(), -2);
    }
}
