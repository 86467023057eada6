//! Path management for the leave tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir`, or the `LEAVE_TRACKER_DATA_DIR` environment variable
//!    bound to it (handled by the `leave` binary through
//!    [`LeavePaths::with_base_dir`])
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/leave-tracker` or `~/.config/leave-tracker`
//! 3. Windows: `%APPDATA%\leave-tracker`

use std::path::PathBuf;

use crate::error::LeaveError;

/// Environment variable behind `--data-dir`
pub const DATA_DIR_ENV: &str = "LEAVE_TRACKER_DATA_DIR";

/// Fixed key the employee list is stored under
pub const EMPLOYEES_KEY: &str = "employees";

/// Manages all paths used by the leave tracker
#[derive(Debug, Clone)]
pub struct LeavePaths {
    base_dir: PathBuf,
}

impl LeavePaths {
    /// Resolve the platform default base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, LeaveError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path of the employee blob (<base>/data/employees.json)
    pub fn employees_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", EMPLOYEES_KEY))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), LeaveError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LeaveError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LeaveError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LeaveError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                LeaveError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("leave-tracker"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LeaveError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LeaveError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("leave-tracker"))
}
