// Integration tests for logging functionality
// Note: the logger installs a process-wide subscriber, so this file holds a
// single test that initializes it once.

use molsearch::infrastructure::logging::{
    info, instrument, prune_log_files, LogConfig, LogFormat, LoggerImpl, RotationPolicy,
};
use molsearch::ServiceConfig;
use std::fs;
use tempfile::TempDir;

fn log_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("molsearch.") && n.ends_with(".log"))
        })
        .collect()
}

#[test]
fn test_logging_writes_files_and_applies_retention() {
    let temp_dir = TempDir::new().unwrap();

    // Leftovers from earlier runs
    for day in ["2000-01-01", "2000-01-02", "2000-01-03"] {
        fs::write(temp_dir.path().join(format!("molsearch.{day}.log")), b"old\n").unwrap();
    }
    let unrelated = temp_dir.path().join("molsearch-audit.log");
    fs::write(&unrelated, b"audit\n").unwrap();

    let service = ServiceConfig {
        log_retention_count: 2,
        ..Default::default()
    };
    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_stdout: false,
        rotation: RotationPolicy::Daily,
        ..LogConfig::from_service(&service)
    };
    assert_eq!(config.retention_count, 2);

    let logger = LoggerImpl::init(&config).unwrap();

    info!("Test message 1");
    info!(key = "value", "Test message with fields");
    assert_eq!(instrumented_add(5, 7), 12);

    // A second global subscriber cannot be installed
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let files = log_files(temp_dir.path());
    assert!(
        files.len() <= 2,
        "retention should keep at most 2 files, found {files:?}"
    );

    let contents: String = files
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert!(contents.contains("Test message 1"));
    assert!(contents.contains("Test message with fields"));
    assert!(contents.contains("entering instrumented function"));
    // Startup pruning happens with the subscriber installed, so it is recorded
    assert!(contents.contains("cleaned up old log files"));
    assert!(unrelated.exists());

    // Zero keeps everything
    assert_eq!(prune_log_files(temp_dir.path(), 0).unwrap(), 0);
}

#[instrument]
fn instrumented_add(a: i32, b: i32) -> i32 {
    info!("entering instrumented function");
    a + b
}
