//! Certificate source configuration
//!
//! Certificate material is a single configuration value whether it is embedded
//! PEM or a `file://` reference.

use serde::{Deserialize, Serialize};

use crate::certificate::{CertificateLoader, LoadedCertificate};
use crate::error::{CertificateError, Result};
use crate::source::PathStyle;

/// Where to find a certificate and, optionally, its private key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSourceConfig {
    /// Inline PEM text or `file://` URI of the certificate
    pub certificate: String,
    /// Inline PEM text or `file://` URI of the private key
    #[serde(default)]
    pub private_key: Option<String>,
    /// Path convention for `file://` sources
    #[serde(default)]
    pub path_style: PathStyle,
}

impl CertificateSourceConfig {
    /// Configuration for a certificate without a private key
    #[must_use]
    pub fn new(certificate: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            private_key: None,
            path_style: PathStyle::native(),
        }
    }

    /// Add a private key source
    #[must_use]
    pub fn with_private_key(self, private_key: impl Into<String>) -> Self {
        Self {
            private_key: Some(private_key.into()),
            ..self
        }
    }

    /// Read `{prefix}_CERTIFICATE` and optional `{prefix}_PRIVATE_KEY`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::Configuration`] when the certificate variable
    /// is unset, empty, or not valid Unicode.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let cert_var = format!("{prefix}_CERTIFICATE");
        let key_var = format!("{prefix}_PRIVATE_KEY");

        let certificate = std::env::var(&cert_var)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| CertificateError::configuration().context(format!("{cert_var} is not set")))?;
        let private_key = std::env::var(&key_var)
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            certificate,
            private_key,
            path_style: PathStyle::native(),
        })
    }

    /// Loader honouring this configuration's path convention
    #[must_use]
    pub fn loader(&self) -> CertificateLoader {
        CertificateLoader::new().path_style(self.path_style)
    }

    /// Load the configured certificate and key
    ///
    /// # Errors
    ///
    /// See [`CertificateLoader::load`].
    pub fn load(&self) -> Result<LoadedCertificate> {
        self.loader()
            .load(&self.certificate, self.private_key.as_deref())
    }

    /// Load the configured certificate and key off the async executor
    ///
    /// # Errors
    ///
    /// See [`CertificateLoader::load_async`].
    pub async fn load_async(&self) -> Result<LoadedCertificate> {
        self.loader()
            .load_async(self.certificate.clone(), self.private_key.clone())
            .await
    }
}
