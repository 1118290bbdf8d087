//! updconf - Update Configuration Persistence Library
//!
//! This library exposes the configuration record used by a system
//! updater (current release/channel, migration target, pending update
//! and rollback flags) together with deterministic JSON file
//! persistence for it.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::Config;
pub use error::ConfigError;
