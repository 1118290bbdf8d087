//! Update configuration record and its file persistence
//!
//! Defines the `Config` record - the current release/channel, the
//! migration target release/channel, and the pending update/rollback
//! flags - and the two operations over it: `write` (serialize to the
//! record's own backing file) and `read` (reconstruct a record from a
//! file).
//!
//! The on-disk form is a compact JSON object with a fixed key order:
//!
//! ```text
//! {"FileName":"...","Release":"...","Channel":"...","TargetRelease":"...","TargetChannel":"...","Update":true,"Rollback":false}
//! ```
//!
//! Writes are atomic: content is staged in a temporary file next to the
//! destination and renamed into place, so a crash mid-write never
//! leaves a truncated document behind.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ConfigError;

/// Persistent update configuration for the system.
///
/// Key order in the serialized form follows field declaration order.
/// All seven fields are mandatory: a document missing any of them (or
/// carrying extra ones) is rejected on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Config {
    /// Absolute path of the backing file. Stored inside the document
    /// itself, so a written file records its own location; consumers
    /// may use this for self-verification.
    pub file_name: String,
    /// Current release identifier
    pub release: String,
    /// Current update channel identifier
    pub channel: String,
    /// Release identifier to migrate to
    pub target_release: String,
    /// Channel identifier to migrate to
    pub target_channel: String,
    /// Whether an update is pending
    pub update: bool,
    /// Whether a rollback is pending
    pub rollback: bool,
}

impl Config {
    /// Create a fully populated configuration record.
    ///
    /// Pure construction: no I/O is performed and `file_name` is not
    /// validated for path legality.
    pub fn new(
        file_name: impl Into<String>,
        release: impl Into<String>,
        channel: impl Into<String>,
        target_release: impl Into<String>,
        target_channel: impl Into<String>,
        update: bool,
        rollback: bool,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            release: release.into(),
            channel: channel.into(),
            target_release: target_release.into(),
            target_channel: target_channel.into(),
            update,
            rollback,
        }
    }

    /// Serialize the record to compact JSON and write it to the path
    /// named by `file_name`, overwriting any existing content.
    ///
    /// The parent directory must already exist; this crate does not
    /// provision directories. Staging happens in a temporary file in
    /// that directory, renamed over the destination on success.
    pub fn write(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.file_name);
        let contents = serde_json::to_string(self).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        })?;

        // A bare file name has an empty parent; stage in the current
        // directory in that case so the rename stays on one filesystem.
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|source| {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        staged
            .write_all(contents.as_bytes())
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        staged.persist(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        debug!("Wrote configuration to {}", path.display());
        Ok(())
    }

    /// Read and deserialize the configuration file at `path`.
    ///
    /// Returns `ConfigError::NotFound` if the file is absent or
    /// unreadable, and `ConfigError::Parse` if its content is not a
    /// well-formed configuration document (including non-UTF-8 bytes).
    /// No defaulting: a document with fewer than seven fields is
    /// malformed.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        // Read raw bytes so content problems (even invalid UTF-8) are
        // classified as parse failures, not access failures.
        let contents = fs::read(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_slice(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Read configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(file_name: &str) -> Config {
        Config::new(
            file_name,
            "testrelease",
            "testchannel",
            "testtargetrelease",
            "testtargetchannel",
            true,
            true,
        )
    }

    #[test]
    fn test_serialized_shape_is_exact() {
        let config = test_config("F");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"FileName":"F","Release":"testrelease","Channel":"testchannel","TargetRelease":"testtargetrelease","TargetChannel":"testtargetchannel","Update":true,"Rollback":true}"#
        );
    }

    #[test]
    fn test_booleans_serialize_as_lowercase_tokens() {
        let mut config = test_config("F");
        config.update = false;
        config.rollback = false;
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""Update":false"#));
        assert!(json.contains(r#""Rollback":false"#));
        assert!(!json.contains("False"));
    }

    #[test]
    fn test_string_values_are_escaped() {
        let config = Config::new(
            "/tmp/with \"quotes\".config",
            "r",
            "c",
            "tr",
            "tc",
            false,
            false,
        );
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.starts_with(r#"{"FileName":"/tmp/with \"quotes\".config","#));
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // No Rollback key
        let json = r#"{"FileName":"F","Release":"r","Channel":"c","TargetRelease":"tr","TargetChannel":"tc","Update":true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{"FileName":"F","Release":"r","Channel":"c","TargetRelease":"tr","TargetChannel":"tc","Update":true,"Rollback":true,"Extra":1}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        // Update must be a boolean, not a string
        let json = r#"{"FileName":"F","Release":"r","Channel":"c","TargetRelease":"tr","TargetChannel":"tc","Update":"yes","Rollback":true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
