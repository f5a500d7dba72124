// Integration tests for logging functionality
// Initializing the logger installs a global subscriber, so this file holds
// a single test and runs in its own process.

use simparams::infrastructure::logging::{
    info, LogConfig, LogFormat, LoggerImpl, RotationPolicy, LOG_FILE_NAME,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_logging_to_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();

    info!("Test message 1");
    info!(key = "value", "Test message with fields");

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME))
        .expect("log file should exist");
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();

    assert!(lines
        .iter()
        .any(|l| l["fields"]["message"] == "Test message 1"));
    assert!(lines
        .iter()
        .any(|l| l["fields"]["key"] == "value"));

    // A second global subscriber cannot be installed
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());
}
