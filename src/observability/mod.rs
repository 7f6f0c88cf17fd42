//! Observability helpers: request counters and log hygiene.
//!
//! The SDK logs through `tracing`; subscriber installation and filtering
//! belong to the consuming application. `ICONIK_LOG` is an advisory level
//! hint only, not part of the API contract.

use std::sync::atomic::{AtomicU64, Ordering};

/// Environment variable advising the log level.
pub const LOG_LEVEL_ENV: &str = "ICONIK_LOG";

/// Request counters for a client.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total requests made.
    requests_total: AtomicU64,
    /// Requests answered 2xx.
    requests_success: AtomicU64,
    /// Requests that ended in a non-2xx status or an error.
    requests_failed: AtomicU64,
    /// Retry attempts performed.
    requests_retried: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a logical request.
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successful request.
    pub fn record_success(&self) {
        self.requests_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed request.
    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a retry attempt.
    pub fn record_retry(&self) {
        self.requests_retried.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the total request count.
    pub fn total_requests(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Gets the successful request count.
    pub fn successful_requests(&self) -> u64 {
        self.requests_success.load(Ordering::Relaxed)
    }

    /// Gets the failed request count.
    pub fn failed_requests(&self) -> u64 {
        self.requests_failed.load(Ordering::Relaxed)
    }

    /// Gets the retry attempt count.
    pub fn retried_requests(&self) -> u64 {
        self.requests_retried.load(Ordering::Relaxed)
    }
}

/// Log level hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    Warn,
    /// Error level (least verbose).
    Error,
}

/// Reads the advisory log level from `ICONIK_LOG`.
pub fn log_level_from_env() -> Option<LogLevel> {
    match std::env::var(LOG_LEVEL_ENV).ok()?.to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

/// Headers whose values must never appear in logs.
pub const SENSITIVE_HEADERS: &[&str] = &["auth-token", "app-id", "cookie", "set-cookie"];

/// Redacts sensitive values in headers.
pub fn redact_header(name: &str, value: &str) -> String {
    if SENSITIVE_HEADERS.contains(&name.to_lowercase().as_str()) {
        "[REDACTED]".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();

        metrics.record_request();
        metrics.record_retry();
        metrics.record_success();

        assert_eq!(metrics.total_requests(), 1);
        assert_eq!(metrics.retried_requests(), 1);
        assert_eq!(metrics.successful_requests(), 1);
        assert_eq!(metrics.failed_requests(), 0);
    }

    #[test]
    fn test_log_level_from_env() {
        std::env::set_var(LOG_LEVEL_ENV, "debug");
        assert_eq!(log_level_from_env(), Some(LogLevel::Debug));
        std::env::set_var(LOG_LEVEL_ENV, "WARNING");
        assert_eq!(log_level_from_env(), Some(LogLevel::Warn));
        std::env::set_var(LOG_LEVEL_ENV, "bogus");
        assert_eq!(log_level_from_env(), None);
        std::env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn test_redact_header() {
        assert_eq!(redact_header("Auth-Token", "tok_secret"), "[REDACTED]");
        assert_eq!(redact_header("App-ID", "8b4e1c2a"), "[REDACTED]");
        assert_eq!(
            redact_header("Content-Type", "application/json"),
            "application/json"
        );
    }
}
