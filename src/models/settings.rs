//! Operator-controlled capacity and business-hour configuration.

use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

/// Configuration error surfaced at acceptance time.
///
/// Invalid settings are fatal to the configuration change that carried them;
/// they are never silently clamped into a valid range.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("slot interval must be a positive number of minutes")]
    NonPositiveInterval,

    #[error("close time {close} must be after open time {open}")]
    CloseNotAfterOpen { open: TimeOfDay, close: TimeOfDay },

    #[error("maximum capacity must be a positive number of units")]
    NonPositiveCapacity,

    #[error("calendar horizon must be at least one month")]
    NonPositiveHorizon,

    #[error("availability thresholds must satisfy 0 <= full <= limited <= 1")]
    InvalidThresholds,

    #[error("product `{id}`: {reason}")]
    InvalidProduct { id: String, reason: String },

    #[error("failed to read product catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("failed to parse product catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

/// Ratio cut-offs for the advisory availability classification.
///
/// These are presentation heuristics rather than engine contracts, so they
/// are carried in [`Settings`] instead of being hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityThresholds {
    /// Ratio at or below which a day displays as full.
    pub full: f64,
    /// Ratio below which a day displays as limited.
    pub limited: f64,
}

impl Default for AvailabilityThresholds {
    fn default() -> Self {
        Self {
            full: 0.0,
            limited: 0.3,
        }
    }
}

/// Operator-controlled configuration for the booking grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Total concurrent capacity in units.
    pub max_capacity_units: u32,
    /// Start of business hours.
    pub open_time: TimeOfDay,
    /// End of business hours; bookings must finish at or before this.
    pub close_time: TimeOfDay,
    /// Grid step in minutes. Need not divide the open window evenly; the
    /// grid simply never overshoots close time.
    pub slot_interval_minutes: u32,
    /// How many months ahead bookings are accepted.
    pub calendar_horizon_months: u32,
    /// Dates on which bookings are disallowed.
    #[serde(default)]
    pub holiday_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub availability_thresholds: AvailabilityThresholds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_capacity_units: 6,
            open_time: TimeOfDay::from_hm(9, 0).unwrap_or_default(),
            close_time: TimeOfDay::from_hm(19, 0).unwrap_or_default(),
            slot_interval_minutes: 30,
            calendar_horizon_months: 3,
            holiday_dates: BTreeSet::new(),
            availability_thresholds: AvailabilityThresholds::default(),
        }
    }
}

impl Settings {
    /// Validate the configuration. Called whenever new settings are
    /// accepted; the engine assumes any `Settings` it receives passed this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_interval_minutes == 0 {
            return Err(ConfigError::NonPositiveInterval);
        }
        if self.close_time <= self.open_time {
            return Err(ConfigError::CloseNotAfterOpen {
                open: self.open_time,
                close: self.close_time,
            });
        }
        if self.max_capacity_units == 0 {
            return Err(ConfigError::NonPositiveCapacity);
        }
        if self.calendar_horizon_months == 0 {
            return Err(ConfigError::NonPositiveHorizon);
        }
        let t = &self.availability_thresholds;
        if !(0.0..=1.0).contains(&t.full) || !(0.0..=1.0).contains(&t.limited) || t.full > t.limited
        {
            return Err(ConfigError::InvalidThresholds);
        }
        Ok(())
    }

    /// Whether bookings are disallowed on `date`.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_dates.contains(&date)
    }

    /// Last bookable date as seen from `today`.
    pub fn horizon_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(self.calendar_horizon_months))
            .unwrap_or(NaiveDate::MAX)
    }
}
