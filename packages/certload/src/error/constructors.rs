//! Error constructors and accessors

use super::types::{CertificateError, ErrorInner, ErrorKind};
use std::fmt;
use std::sync::Arc;

impl CertificateError {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, None, None, None)
    }

    /// Create an error that wraps an underlying cause
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::build(
            kind,
            None,
            Some(Box::new(source)),
            Some(std::any::type_name::<E>()),
        )
    }

    fn build(
        kind: ErrorKind,
        context: Option<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        source_type: Option<&'static str>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context,
                source,
                source_type,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Attach a human-readable context message, keeping kind and cause
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        match Arc::try_unwrap(self.inner) {
            Ok(mut inner) => {
                inner.context = Some(context.to_string());
                Self {
                    inner: Arc::new(inner),
                }
            }
            Err(shared) => {
                let kind = shared.kind.clone();
                let source_type = shared.source_type;
                Self::build(
                    kind,
                    Some(context.to_string()),
                    Some(Box::new(Self { inner: shared })),
                    source_type,
                )
            }
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Type name of the wrapped cause, if one was recorded
    #[must_use]
    pub fn source_type_name(&self) -> Option<&'static str> {
        self.inner.source_type
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Create a source-unavailable error
    #[must_use]
    pub fn source_unavailable() -> Self {
        Self::new(ErrorKind::SourceUnavailable)
    }

    /// Create a malformed-certificate error
    #[must_use]
    pub fn malformed_certificate() -> Self {
        Self::new(ErrorKind::MalformedCertificate)
    }

    /// Create a malformed-key error
    #[must_use]
    pub fn malformed_key() -> Self {
        Self::new(ErrorKind::MalformedKey)
    }

    /// Create an unsupported-algorithm error naming the rejected algorithm
    #[must_use]
    pub fn unsupported_algorithm(algorithm: impl fmt::Display) -> Self {
        Self::new(ErrorKind::UnsupportedAlgorithm).context(algorithm)
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }
}
