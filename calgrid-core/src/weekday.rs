//! Weekday-index sets.
//!
//! Weekdays are indexed 0=Sunday through 6=Saturday, matching the storage
//! format where weekly events carry a comma-separated digit string like
//! `"1,3,5"` (Mon/Wed/Fri). The string form is decoded into a `WeekdaySet`
//! at the storage boundary; nothing past that boundary works with the
//! encoded string.

use std::collections::BTreeSet;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Abbreviated weekday names, indexed 0=Sunday through 6=Saturday.
pub const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A set of weekday indices (0=Sunday ... 6=Saturday).
///
/// Every index held by the set is guaranteed to be in `0..=6`; construction
/// drops anything else. Iteration order is ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySet(BTreeSet<u8>);

impl WeekdaySet {
    pub fn new() -> Self {
        WeekdaySet(BTreeSet::new())
    }

    /// Build a set from weekday indices, silently dropping anything
    /// outside `0..=6`.
    pub fn from_indices<I: IntoIterator<Item = u8>>(indices: I) -> Self {
        WeekdaySet(indices.into_iter().filter(|i| *i <= 6).collect())
    }

    /// Decode the storage-boundary comma string (e.g. `"1,3,5"`).
    ///
    /// Blank entries, non-numeric entries, and out-of-range digits are
    /// dropped rather than rejected; an empty or all-junk string yields the
    /// empty set. Lenient on purpose: a weekly event with no recognizable
    /// weekdays simply never matches.
    pub fn parse_csv(s: &str) -> Self {
        WeekdaySet::from_indices(
            s.split(',')
                .filter_map(|part| part.trim().parse::<u8>().ok()),
        )
    }

    /// Re-encode as the storage comma string, ascending order.
    pub fn to_csv(&self) -> String {
        self.0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn contains(&self, index: u8) -> bool {
        self.0.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let indices = Vec::<u8>::deserialize(deserializer)?;
        Ok(WeekdaySet::from_indices(indices))
    }
}
