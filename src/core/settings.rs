use crate::errors::{AppError, AppResult};
use crate::models::WeeklySettings;
use crate::store::SettingsStore;
use chrono::Weekday;

/// Reads and writes a user's weekly target hours.
pub struct SettingsAccessor<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> SettingsAccessor<'a> {
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Fetch the user's settings, seeding and persisting the defaults on
    /// first access.
    pub fn load(&self, user_id: i64) -> AppResult<WeeklySettings> {
        let existing = self
            .store
            .settings_for_user(user_id)
            .map_err(|e| AppError::remote("Error loading settings", e))?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        let defaults = WeeklySettings::defaults_for(user_id);
        self.store
            .insert_settings(&defaults)
            .map_err(|e| AppError::remote("Error creating default settings", e))?;

        Ok(defaults)
    }

    /// Upsert keyed by user id; all seven days are overwritten.
    pub fn save(&self, settings: &WeeklySettings) -> AppResult<()> {
        for day in crate::models::settings::WEEK {
            validate_hours(day, settings.goal_for(day))?;
        }

        self.store
            .upsert_settings(settings)
            .map_err(|e| AppError::remote("Error saving settings", e))
    }
}

/// Target hours must be a finite value in 0..=24.
pub fn validate_hours(day: Weekday, hours: f64) -> AppResult<()> {
    if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
        return Err(AppError::InvalidSetting(format!(
            "{} must be between 0 and 24 hours, got {}",
            crate::models::settings::day_key(day),
            hours
        )));
    }
    Ok(())
}
