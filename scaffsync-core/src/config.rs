//! Pipeline configuration — the fixed literals of the sync pipeline as data.
//!
//! The permission block, the SDK-version patch, and the identity override
//! were historically compile-time constants baked into the pipeline. They
//! live here as a [`SyncConfig`] so a run can be parameterized from a JSON
//! file without touching synchronizer logic. [`SyncConfig::default`]
//! reproduces the canonical constants.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Recognized options for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Ordered permission declarations injected after the manifest root tag.
    pub permissions: Vec<String>,

    /// Token that locates the SDK-version line in the build script.
    pub sdk_version_token: String,

    /// Literal line that replaces the matched SDK-version line.
    pub sdk_version_line: String,

    /// Value written into the destination manifest's `name` field.
    pub project_name: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            permissions: vec![
                r#"<uses-permission android:name="android.permission.BLUETOOTH_SCAN" />"#.into(),
                r#"<uses-permission android:name="android.permission.BLUETOOTH_CONNECT" />"#
                    .into(),
                r#"<uses-permission android:name="android.permission.BLUETOOTH" android:maxSdkVersion="30" />"#
                    .into(),
                r#"<uses-permission android:name="android.permission.BLUETOOTH_ADMIN" android:maxSdkVersion="30" />"#
                    .into(),
                r#"<uses-permission android:name="android.permission.ACCESS_FINE_LOCATION" />"#
                    .into(),
            ],
            sdk_version_token: "minSdkVersion".into(),
            sdk_version_line: "minSdkVersion 23".into(),
            project_name: "test_project".into(),
        }
    }
}

/// Load a [`SyncConfig`] from a JSON file.
///
/// Missing fields fall back to their defaults, so a config file may override
/// only the options it cares about.
pub fn load(path: &Path) -> Result<SyncConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: PathBuf::from(path),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_carries_five_permissions() {
        let config = SyncConfig::default();
        assert_eq!(config.permissions.len(), 5);
        assert!(config.permissions[0].contains("BLUETOOTH_SCAN"));
        assert_eq!(config.sdk_version_line, "minSdkVersion 23");
        assert_eq!(config.project_name, "test_project");
    }

    #[test]
    fn load_partial_file_keeps_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scaffsync.json");
        std::fs::write(&path, r#"{ "project_name": "demo_app" }"#).unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.project_name, "demo_app");
        assert_eq!(config.permissions, SyncConfig::default().permissions);
    }

    #[test]
    fn load_invalid_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = load(&path).expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("absent.json")).expect_err("should fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
