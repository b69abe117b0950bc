use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minutes in a full day; all grid arithmetic stays below this bound.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Time-of-day representation as whole minutes since midnight.
///
/// Serialized as `"HH:MM"`. The booking grid is minute-granular, so integer
/// minute-of-day arithmetic is exact and cheap to compare.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Create from minutes since midnight. Returns `None` for values past
    /// the end of the day.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Create from an hour/minute pair.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Add a duration in minutes, failing if the result leaves the day.
    pub fn checked_add_minutes(&self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.0) + minutes;
        u16::try_from(total).ok().and_then(Self::from_minutes)
    }

    /// Whole minutes from `self` to `later`; `None` when `later` is earlier.
    pub fn minutes_until(&self, later: TimeOfDay) -> Option<u16> {
        later.0.checked_sub(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Parse error for [`TimeOfDay`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day `{input}` (expected HH:MM)")]
pub struct ParseTimeError {
    input: String,
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeError {
            input: s.to_string(),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
