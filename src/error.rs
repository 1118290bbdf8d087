//! Error types for configuration persistence
//!
//! Read-side failures are split into `NotFound` (file absent or
//! unreadable) and `Parse` (content not a well-formed configuration
//! document); write-side failures surface as `Io`. All variants carry
//! the offending path and propagate directly to the caller - there is
//! no retry or fallback configuration inside this crate.

use std::path::PathBuf;

/// Custom error types for configuration persistence operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Write-side failure: missing parent directory, unwritable path,
    /// or insufficient permissions
    #[error("Failed to write configuration to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read-side failure: the configuration file is absent or unreadable
    #[error("Configuration file not found or unreadable at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read-side failure: the file content is not a well-formed
    /// configuration document (malformed syntax, missing fields,
    /// wrong value types, or unknown fields)
    #[error("Malformed configuration file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
