use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

/// Install the file logger when debugging is on. The returned guard flushes
/// pending lines on drop and must outlive the event loop.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    if !config.debug {
        return Ok(None);
    }
    let appender = open_log(&config.log_dir, &config.log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Other(e.to_string()))?;

    tracing::info!(path = %config.log_dir.join(&config.log_file).display(), "logging started");
    Ok(Some(guard))
}

/// Open `dir/file` for appending, without rotation.
pub fn open_log(dir: &Path, file: &str) -> Result<RollingFileAppender, AppError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file)
        .build(dir)?;
    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_a_no_op_without_debug() {
        let config = Config::from_lookup(|_| None);
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_open_log_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let _appender = open_log(dir.path(), "debug.log").unwrap();
        assert!(dir.path().join("debug.log").exists());
    }

    #[test]
    fn test_open_log_fails_when_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = open_log(file.path(), "debug.log");
        assert!(matches!(result, Err(AppError::Log(_))));
    }
}
