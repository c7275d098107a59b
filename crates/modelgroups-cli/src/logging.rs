//! Tracing subscriber setup.

use std::path::Path;

use modelgroups_core::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "modelgroups.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs always go to stderr so
/// `--json` output on stdout stays clean; with `to_file` they are also written
/// to a daily rolling file in `logs_dir`. Keep the returned guard alive until
/// exit or buffered file output is lost.
pub fn init_tracing(config: &LoggingConfig, logs_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_writer(std::io::stderr);

    let mut guard = None;
    let mut file_error = None;
    let file_layer = match (config.to_file, logs_dir) {
        (true, Some(dir)) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(writer),
                )
            }
            Err(e) => {
                file_error = Some(format!("failed to create log dir {}: {}", dir.display(), e));
                None
            }
        },
        _ => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer);
    if let Err(e) = subscriber.try_init() {
        tracing::debug!("tracing already set: {:?}", e);
    }

    if let Some(message) = file_error {
        tracing::warn!("{}", message);
    }

    guard
}
