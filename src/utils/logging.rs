use std::fmt::Display;
use tracing_subscriber::EnvFilter;

/// How bad a reported exception is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

/// Sink for errors that are handled locally instead of being returned
pub trait ExceptionLogger: Send + Sync {
    fn exception(&self, message: &str, error: &dyn Display, severity: Severity);
}

/// Reports exceptions through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ExceptionLogger for TracingLogger {
    fn exception(&self, message: &str, error: &dyn Display, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{}: {}", message, error),
            Severity::Warning => tracing::warn!("[WARN] {}: {}", message, error),
            Severity::Error => tracing::error!("[ERROR] {}: {}", message, error),
            Severity::Critical => tracing::error!("[CRITICAL] {}: {}", message, error),
        }
    }
}

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }
}
