//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Error raised by source resolution and certificate reconstruction
#[derive(Debug, Clone)]
pub struct CertificateError {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    /// Concrete type name of `source`, recorded before it is boxed
    pub source_type: Option<&'static str>,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Failure categories a [`CertificateError`] can carry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// File missing, unreadable, or not valid UTF-8
    #[error("Certificate source unavailable")]
    SourceUnavailable,

    /// PEM block does not decode as an X.509 certificate
    #[error("Malformed certificate")]
    MalformedCertificate,

    /// PEM block does not decode as an unencrypted private key
    #[error("Malformed private key")]
    MalformedKey,

    /// Key algorithm outside the supported RSA / elliptic-curve set
    #[error("Unsupported key algorithm")]
    UnsupportedAlgorithm,

    /// Missing or invalid configuration values
    #[error("Configuration error")]
    Configuration,

    /// Internal failure such as a panicked worker task
    #[error("Internal error")]
    Internal,
}

/// Result type alias using [`CertificateError`]
pub type Result<T> = std::result::Result<T, CertificateError>;
