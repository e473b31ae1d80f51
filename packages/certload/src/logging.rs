//! Structured logging for certificate loading
//!
//! Events are emitted through `tracing`; with its `log` feature they reach the
//! `env_logger` backend installed here when no tracing subscriber is present.

use std::sync::Once;

use crate::error::CertificateError;

static INIT_LOGGER: Once = Once::new();

/// Logging setup and failure reporting helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from `RUST_LOG`, e.g. `RUST_LOG=certload=debug` to see every
    /// pipeline stage.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            tracing::info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Record a failed operation once, with its kind and the cause's type name
    ///
    /// The message never includes PEM material; only error descriptions.
    pub fn log_certificate_error(operation: &str, error: &CertificateError) {
        tracing::error!(
            "Certificate operation failed: {} (kind: {:?}, error_type: {}): {:#}",
            operation,
            error.kind(),
            error.source_type_name().unwrap_or("none"),
            error
        );

        #[cfg(feature = "full-backtrace")]
        tracing::debug!("Backtrace for failed {}:\n{:?}", operation, error.backtrace());
    }
}
