//! File sink of `logging::init`
//!
//! Lives in its own test binary because the global subscriber can only be
//! installed once per process.

use rust_tiler::logging::{self, LogConfig};

#[test]
fn test_file_sink_writes_dated_log() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let config = LogConfig {
        file_prefix: "camera".to_string(),
        ..LogConfig::default().with_directory(&logs)
    };

    let handle = logging::init(&config).unwrap();
    assert!(handle.is_buffered());
    let path = handle.file().unwrap().to_path_buf();
    assert_eq!(path, logs.join(config.file_name()));

    tracing::info!(strips = 3, "file sink record");
    tracing::debug!("below the info filter");
    // dropping the guard flushes the background writer
    drop(handle);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("file sink record"));
    assert!(text.contains("strips=3"));
    assert!(!text.contains("below the info filter"));
    assert!(!text.contains('\u{1b}'));

    // a second subscriber cannot be installed
    let again = logging::init(&LogConfig::default());
    assert!(matches!(again, Err(rust_tiler::Error::Logging(_))));
}
