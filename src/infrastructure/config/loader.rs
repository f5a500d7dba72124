use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::logging::{parse_log_level, LogConfig};

/// Prefix for environment overrides, e.g. `SIMPARAMS_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SIMPARAMS_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `logging.level` is not a known level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// `logging.log_dir` is set but empty
    #[error("Log directory cannot be empty")]
    EmptyLogDir,
}

/// Runtime settings for the tool itself (not the parameter file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// Settings loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Environment variables (`SIMPARAMS_*` prefix, `__` for nesting)
    pub fn load() -> Result<Settings> {
        Self::load_with(Figment::new())
    }

    /// Load settings, then merge `overrides` on top (used for CLI flags)
    pub fn load_with(overrides: Figment) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            // `SIMPARAMS_FILE` names the parameter file and is read by clap
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["FILE"]).split("__"))
            .merge(overrides)
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if parse_log_level(&settings.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(settings.logging.level.clone()));
        }

        if settings
            .logging
            .log_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyLogDir);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::{LogFormat, RotationPolicy};
    use std::path::PathBuf;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.logging.format, LogFormat::Compact);
        assert!(settings.logging.log_dir.is_none());
        ConfigLoader::validate(&settings).expect("Default settings should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();

        match ConfigLoader::validate(&settings) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "loud"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_log_dir() {
        let mut settings = Settings::default();
        settings.logging.log_dir = Some(PathBuf::new());

        assert!(matches!(
            ConfigLoader::validate(&settings),
            Err(ConfigError::EmptyLogDir)
        ));
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("SIMPARAMS_LOGGING__LEVEL", Some("debug")),
                ("SIMPARAMS_LOGGING__FORMAT", Some("json")),
                ("SIMPARAMS_LOGGING__ROTATION", Some("daily")),
                ("SIMPARAMS_FILE", Some("other.json")),
            ],
            || {
                let settings = ConfigLoader::load().unwrap();
                assert_eq!(settings.logging.level, "debug");
                assert_eq!(settings.logging.format, LogFormat::Json);
                assert_eq!(settings.logging.rotation, RotationPolicy::Daily);
            },
        );
    }

    #[test]
    fn test_overrides_win_over_env() {
        temp_env::with_var("SIMPARAMS_LOGGING__LEVEL", Some("debug"), || {
            let overrides =
                Figment::new().merge(Serialized::default("logging.level", "error"));
            let settings = ConfigLoader::load_with(overrides).unwrap();
            assert_eq!(settings.logging.level, "error");
        });
    }

    #[test]
    fn test_invalid_env_level_rejected() {
        temp_env::with_var("SIMPARAMS_LOGGING__LEVEL", Some("chatty"), || {
            let err = ConfigLoader::load().unwrap_err();
            assert!(err.to_string().contains("Invalid log level: chatty"));
        });
    }
}
