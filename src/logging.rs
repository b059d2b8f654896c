//! File-based tracing setup.
//!
//! The widget owns the terminal, so logs go to a rolling file instead of
//! stderr. Filter with `RUST_LOG` (default `typofix=info`).

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking log worker alive. Hold it for the process lifetime.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &std::path::Path {
        &self.log_dir
    }
}

/// Initialize tracing to a daily-rolling file.
///
/// Returns None when the log directory cannot be created or a subscriber is
/// already installed; the widget runs fine without logs.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = std::env::temp_dir().join("typofix").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "typofix.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("typofix=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    // Panics land in the log file too, since stderr is the alt screen.
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
