//! Subscriber setup
//!
//! Nothing here runs implicitly: the application builds a [`LogConfig`],
//! calls [`init`] once at startup and keeps the returned [`LogHandle`] alive
//! for as long as records should be flushed to disk.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::utils::timing::date_stamp;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `rust_tiler=debug`
    pub level: String,
    /// Write to a dated file in this directory instead of stderr
    pub directory: Option<PathBuf>,
    /// File name prefix; the file is `{prefix}_{YYYYMMDD}.log`
    pub file_prefix: String,
    /// Colourise stderr output
    pub ansi: bool,
    /// Include the module target in each record
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "tiler".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Defaults overridden by `TILER_LOG` and `TILER_LOG_DIR`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("TILER_LOG") {
            if !level.trim().is_empty() {
                config.level = level.trim().to_string();
            }
        }
        if let Ok(dir) = std::env::var("TILER_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.directory = Some(PathBuf::from(dir.trim()));
            }
        }
        config
    }

    /// Same config at `debug` level
    pub fn verbose(mut self) -> Self {
        self.level = "debug".to_string();
        self
    }

    /// Same config logging into `dir`
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Log file name for today
    pub fn file_name(&self) -> String {
        format!("{}_{}.log", self.file_prefix, date_stamp(&Local::now()))
    }
}

/// Keeps the background file writer alive; drop it to flush and stop
#[derive(Debug)]
pub struct LogHandle {
    guard: Option<WorkerGuard>,
    file: Option<PathBuf>,
}

impl LogHandle {
    /// Log file in use, `None` when logging to stderr
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// True when a background file writer is running
    pub fn is_buffered(&self) -> bool {
        self.guard.is_some()
    }
}

/// Install the global subscriber described by `config`
///
/// Fails if the filter directive is invalid, the log directory cannot be
/// created, or a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<LogHandle> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| Error::Logging(e.to_string()))?;

    match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_name = config.file_name();
            let appender = tracing_appender::rolling::never(dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(config.with_target)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(LogHandle {
                guard: Some(guard),
                file: Some(dir.join(file_name)),
            })
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(config.with_target)
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| Error::Logging(e.to_string()))?;
            Ok(LogHandle {
                guard: None,
                file: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_dated() {
        let config = LogConfig {
            file_prefix: "camera".to_string(),
            ..LogConfig::default()
        };
        let name = config.file_name();
        assert!(name.starts_with("camera_"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "camera_".len() + 8 + ".log".len());
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::default().verbose().with_directory("/tmp/logs");
        assert_eq!(config.level, "debug");
        assert_eq!(config.directory, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LogConfig {
            level: "rust_tiler=notalevel".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(init(&config), Err(Error::Logging(_))));
    }
}
