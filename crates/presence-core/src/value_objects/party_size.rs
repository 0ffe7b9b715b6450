//! Party size - `[current, max]` occupancy of an activity party

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current and maximum party occupancy
///
/// Serialized as a two-element array, `[current, max]`. Construction does not
/// check ordering; normalization rejects `current > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct PartySize {
    pub current: u32,
    pub max: u32,
}

impl PartySize {
    #[inline]
    pub const fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Check the `current <= max` invariant
    #[inline]
    pub const fn is_ordered(&self) -> bool {
        self.current <= self.max
    }

    /// Check if no more members can join
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Remaining slots, zero when full or out of order
    #[inline]
    pub const fn open_slots(&self) -> u32 {
        self.max.saturating_sub(self.current)
    }
}

impl From<[u32; 2]> for PartySize {
    fn from([current, max]: [u32; 2]) -> Self {
        Self { current, max }
    }
}

impl From<PartySize> for [u32; 2] {
    fn from(size: PartySize) -> Self {
        [size.current, size.max]
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current, self.max)
    }
}
