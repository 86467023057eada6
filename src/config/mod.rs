//! Configuration module for the leave tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LeavePaths;
pub use settings::{Settings, WeekStart};
