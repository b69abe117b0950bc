//! Settings acceptance: validate, then persist.

use chrono::NaiveDate;
use tracing::info;

use crate::db::repository::{RepositoryError, StoreRepository};
use crate::models::{ConfigError, Settings};

/// Error type for settings updates.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Current settings document.
pub async fn get_settings(repo: &dyn StoreRepository) -> Result<Settings, RepositoryError> {
    repo.load_settings().await
}

/// Accept a settings change: reject invalid configuration outright (never
/// clamp), then persist. Returns the stored settings.
pub async fn update_settings(
    repo: &dyn StoreRepository,
    settings: Settings,
) -> Result<Settings, SettingsError> {
    settings.validate()?;
    repo.save_settings(settings.clone()).await?;
    info!(
        capacity = settings.max_capacity_units,
        open = %settings.open_time,
        close = %settings.close_time,
        interval = settings.slot_interval_minutes,
        "settings updated"
    );
    Ok(settings)
}

/// Mark `date` as a holiday. Already-booked reservations on that date are
/// untouched; the date only stops accepting new bookings.
pub async fn add_holiday(
    repo: &dyn StoreRepository,
    date: NaiveDate,
) -> Result<Settings, SettingsError> {
    let mut settings = repo.load_settings().await?;
    if settings.holiday_dates.insert(date) {
        repo.save_settings(settings.clone()).await?;
        info!(%date, "holiday added");
    }
    Ok(settings)
}

/// Remove `date` from the holiday calendar. No-op if it was not a holiday.
pub async fn remove_holiday(
    repo: &dyn StoreRepository,
    date: NaiveDate,
) -> Result<Settings, SettingsError> {
    let mut settings = repo.load_settings().await?;
    if settings.holiday_dates.remove(&date) {
        repo.save_settings(settings.clone()).await?;
        info!(%date, "holiday removed");
    }
    Ok(settings)
}
