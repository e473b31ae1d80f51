//! Certificate and private key loading
//!
//! Certificate material arrives either as inline PEM text or as a `file://`
//! URI. This crate resolves it to PEM text, decodes the X.509 structure,
//! restricts keys to RSA or elliptic curve, and returns a normalized
//! [`CertificateDescriptor`] next to the decoded objects and the raw PEM.
//!
//! ```no_run
//! use certload::reconstruct_certificate;
//!
//! # fn main() -> certload::Result<()> {
//! let loaded = reconstruct_certificate(
//!     "file:///etc/archive/client.pem",
//!     Some("file:///etc/archive/client.key"),
//! )?;
//! println!("serial {}", loaded.descriptor.serial_number);
//! # Ok(())
//! # }
//! ```
//!
//! All failures surface as [`CertificateError`]; inspect
//! [`CertificateError::kind`] to tell them apart.

pub mod certificate;
pub mod config;
pub mod error;
pub mod logging;
pub mod source;

pub use certificate::{
    CertificateDescriptor, CertificateLoader, CertificateParts, EcCurve, KeyAlgorithm,
    LoadedCertificate, PrivateKey, PublicKey, RawInstant, SerialNumber, reconstruct_certificate,
};
pub use config::CertificateSourceConfig;
pub use error::{CertificateError, ErrorKind, Result};
pub use logging::LoggingTransformer;
pub use source::{PathStyle, SourceKind, normalize_file_uri, resolve_source};
