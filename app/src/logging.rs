//! Logging configuration with optional file output and size-based rotation.
//!
//! The host decides where logs go: stdout always, plus a rotating log file
//! (10 MB, one rotated file kept) when a log directory is supplied.

use std::path::PathBuf;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FILE_NAME: &str = "hunllef-helper.log";
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// How the host wants logging set up
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Debug level for the helper crates instead of info
    pub debug_logging: bool,

    /// Directory for the rotating log file. `None` logs to stdout only.
    pub log_dir: Option<PathBuf>,
}

/// Platform config directory for the helper (`~/.config/hunllef-helper` on Linux)
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("hunllef-helper"))
}

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,hunllef_core=debug,hunllef_app=debug"
    } else {
        "info"
    }
}

/// Initialize logging.
///
/// Returns a `WorkerGuard` that MUST be held for the host's lifetime so
/// buffered file output is flushed on shutdown. Returns `None` when logging
/// to stdout only, including when the log file cannot be created.
pub fn init(options: LogOptions) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(log_dir) = options.log_dir else {
        init_stdout_only(options.debug_logging);
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since subscriber not initialized
        eprintln!(
            "Failed to create log directory {:?}: {}, using stdout only",
            log_dir, e
        );
        init_stdout_only(options.debug_logging);
        return None;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(MAX_LOG_SIZE),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stdout_only(options.debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(options.debug_logging)))
        .init();

    tracing::info!(
        log_file = ?log_path,
        debug_logging = options.debug_logging,
        "Hunllef helper logging initialized"
    );

    Some(guard)
}

fn init_stdout_only(debug_logging: bool) {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(debug_logging, "Hunllef helper logging initialized (stdout only)");
}
