use crate::config::LoggingSettings;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `settings` - Verbosity and optional log file. Without a file, logs only go to stderr
pub fn init(settings: &LoggingSettings) {
    let default_level = if settings.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match &settings.file {
        Some(log_path) => {
            let file_layer = fmt::layer()
                .with_writer(rolling_appender(log_path))
                .with_ansi(false)
                .json();
            let _ = subscriber.with(file_layer).try_init();
        }
        None => {
            let _ = subscriber.try_init();
        }
    }
}

/// Daily-rotated appender; the configured file name becomes the prefix.
fn rolling_appender(log_path: &Path) -> RollingFileAppender {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let _ = std::fs::create_dir_all(dir);
    let prefix = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new("holocron.log"));
    tracing_appender::rolling::daily(dir, prefix)
}

fn default_directive(level: &str) -> String {
    format!("holocron={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Once;
    use tempfile::TempDir;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "holocron=debug");
        assert_eq!(default_directive("info"), "holocron=info");
    }

    #[test]
    fn test_init_after_global_subscriber_does_not_panic() {
        init_test_logging();
        init(&LoggingSettings {
            verbose: true,
            file: None,
        });
    }

    #[test]
    fn test_init_with_file_creates_directory() {
        init_test_logging();
        let temp_dir = TempDir::new().unwrap();
        let log_path: PathBuf = temp_dir.path().join("logs").join("holocron.log");

        init(&LoggingSettings {
            verbose: false,
            file: Some(log_path.clone()),
        });

        assert!(log_path.parent().unwrap().exists());
    }
}
