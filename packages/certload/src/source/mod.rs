//! Certificate material acquisition
//!
//! A source string is either inline PEM text or a `file://` URI. Resolution
//! only acquires text; decoding happens in [`crate::certificate`].

use std::path::PathBuf;

use crate::error::{CertificateError, ErrorKind, Result};

pub mod uri;

pub use uri::{FILE_SCHEME, PathStyle, normalize_file_uri};

/// Conventional opening of a PEM block
pub const PEM_HEADER: &str = "-----BEGIN";

/// Where a source string points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The string itself is the PEM text
    Inline,
    /// The string referenced this file
    File(PathBuf),
}

/// Decide whether `input` is inline text or a file reference
///
/// Anything without the `file://` prefix is inline, including other URI
/// schemes.
#[must_use]
pub fn classify_source(input: &str, style: PathStyle) -> SourceKind {
    match normalize_file_uri(input, style) {
        Some(path) => SourceKind::File(PathBuf::from(path)),
        None => SourceKind::Inline,
    }
}

/// Resolve `input` to trimmed PEM text using the native path convention
///
/// # Errors
///
/// Returns [`crate::ErrorKind::SourceUnavailable`] when a referenced file cannot
/// be read as UTF-8 text.
pub fn resolve_source(input: &str) -> Result<String> {
    resolve_source_with_style(input, PathStyle::native())
}

/// Resolve `input` to trimmed PEM text using an explicit path convention
///
/// # Errors
///
/// Returns [`crate::ErrorKind::SourceUnavailable`] when a referenced file cannot
/// be read as UTF-8 text.
pub fn resolve_source_with_style(input: &str, style: PathStyle) -> Result<String> {
    match classify_source(input, style) {
        SourceKind::File(path) => {
            tracing::debug!("Reading certificate material from {}", path.display());
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                CertificateError::with_source(ErrorKind::SourceUnavailable, e)
                    .context(format!("cannot read {}", path.display()))
            })?;
            Ok(contents.trim().to_string())
        }
        SourceKind::Inline => {
            let text = input.trim();
            if !text.starts_with(PEM_HEADER) {
                tracing::warn!("Inline certificate material does not start with a PEM header");
            }
            Ok(text.to_string())
        }
    }
}
