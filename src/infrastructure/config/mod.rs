//! Runtime settings management
//!
//! Hierarchical configuration using figment:
//! - Programmatic defaults
//! - Environment variable overrides
//! - Command-line overrides
//! - Settings validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, Settings, ENV_PREFIX};
