//! User settings for the leave tracker
//!
//! Controls the calendar window, week layout and the audit trail.

use chrono::format::{Item, StrftimeItems};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::LeavePaths;
use crate::error::LeaveError;
use crate::services::calendar::MAX_CALENDAR_MONTHS;

/// First column of a rendered week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    #[default]
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Months shown in the company calendar, starting at the current month
    #[serde(default = "default_calendar_months")]
    pub calendar_months: u32,

    #[serde(default)]
    pub week_start: WeekStart,

    /// Date format for printed dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_calendar_months() -> u32 {
    6
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calendar_months: default_calendar_months(),
            week_start: WeekStart::default(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LeavePaths) -> Result<Self, LeaveError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LeaveError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LeaveError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later while printing
    fn validate(&self) -> Result<(), LeaveError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(LeaveError::Config(format!(
                "Invalid date_format '{}': not a strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Calendar window length, between one month and the calendar cap
    pub fn window_months(&self) -> u32 {
        self.calendar_months.clamp(1, MAX_CALENDAR_MONTHS)
    }
}
