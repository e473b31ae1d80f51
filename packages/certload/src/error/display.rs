//! Rendering of CertificateError
//!
//! `{}` prints the kind, the context and the immediate cause. The alternate
//! form `{:#}` also names the cause's type and walks the rest of its chain,
//! which is what `log_certificate_error` wants for PEM and DER decode failures
//! that nest several layers deep.

use super::types::CertificateError;
use std::error::Error;
use std::fmt;

impl fmt::Display for CertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.kind)?;

        if let Some(context) = &self.inner.context {
            write!(f, ": {context}")?;
        }

        let Some(source) = &self.inner.source else {
            return Ok(());
        };

        if !f.alternate() {
            return write!(f, "\nCaused by: {source}");
        }

        match self.inner.source_type {
            Some(type_name) => write!(f, "\nCaused by ({type_name}): {source}")?,
            None => write!(f, "\nCaused by: {source}")?,
        }

        let mut next = source.source();
        while let Some(cause) = next {
            write!(f, "\n  via: {cause}")?;
            next = cause.source();
        }

        Ok(())
    }
}

impl Error for CertificateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
