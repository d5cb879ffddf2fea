// SPDX-License-Identifier: MPL-2.0
//! Dashboard state persistence using CBOR format.
//!
//! This module stores the settings-form values that should survive a
//! restart but are kept separate from the user-editable TOML preferences.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `FESTBOARD_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

fn default_items_per_page() -> u32 {
    10
}

/// Dashboard settings that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    /// Organization name shown on printed/exported material.
    #[serde(default)]
    pub organization: String,

    /// Contact address used as the default sender for replies.
    #[serde(default)]
    pub contact_email: String,

    /// Whether email alerts are enabled for new activity.
    #[serde(default)]
    pub email_alerts: bool,

    /// Number of rows shown per table page.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            organization: String::new(),
            contact_email: String::new(),
            email_alerts: false,
            items_per_page: default_items_per_page(),
        }
    }
}

impl DashboardState {
    /// Loads dashboard state from the default location.
    ///
    /// Returns a tuple of (state, optional warning). If loading fails, the
    /// default state is returned together with a message suitable for a
    /// warning toast.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads dashboard state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Saved dashboard settings could not be read; defaults restored".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Saved dashboard settings could not be opened; defaults restored".to_string()),
            ),
        }
    }

    /// Saves dashboard state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning message if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves dashboard state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("No writable data directory for dashboard settings".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the data directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Dashboard settings could not be written".to_string());
                }
                None
            }
            Err(_) => Some("Dashboard settings file could not be created".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_ten_items_per_page() {
        let state = DashboardState::default();
        assert_eq!(state.items_per_page, 10);
        assert!(state.organization.is_empty());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = DashboardState {
            organization: "Street Art Festival".to_string(),
            contact_email: "admin@festival.example".to_string(),
            email_alerts: true,
            items_per_page: 25,
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");

        let expected_path = base_dir.join(STATE_FILE);
        assert!(expected_path.exists(), "state file should exist");

        let (loaded, warning) = DashboardState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = DashboardState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state_path = base_dir.join(STATE_FILE);
        fs::write(&state_path, "not valid cbor data").expect("write file");

        let (state, warning) = DashboardState::load_from(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let result = DashboardState::default().save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
