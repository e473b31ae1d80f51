//! `file://` URI to filesystem path normalization
//!
//! Pure string handling with the platform convention passed in explicitly, so
//! every branch can be exercised on any host.

use serde::{Deserialize, Serialize};

/// Scheme prefix that marks a source as a file reference
pub const FILE_SCHEME: &str = "file://";

/// Local-file form with an empty authority (`file:///abs/path`)
const LOCAL_FILE_PREFIX: &str = "file:///";

/// Path convention used when turning a `file://` URI into a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Forward-slash absolute paths (`/etc/ssl/cert.pem`)
    Posix,
    /// Drive-letter and UNC paths (`C:/certs/a.pem`, `//host/share/a.pem`)
    Windows,
}

impl PathStyle {
    /// Convention of the platform this binary was built for
    #[must_use]
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

/// Convert a `file://` URI to a path string
///
/// Returns `None` when `uri` does not start with `file://`.
///
/// - Windows style keeps a remainder starting with `//` untouched (UNC share).
/// - Otherwise leading `/` characters are stripped, and a single `/` is put back
///   when the URI used the `file:///` local form, giving an absolute path.
///   `file://host/path` therefore becomes the relative `host/path`.
/// - Windows style never prefixes `/` to a drive-letter path (`file:///C:/a`
///   becomes `C:/a`).
#[must_use]
pub fn normalize_file_uri(uri: &str, style: PathStyle) -> Option<String> {
    let remainder = uri.strip_prefix(FILE_SCHEME)?;

    if style == PathStyle::Windows && remainder.starts_with("//") {
        return Some(remainder.to_string());
    }

    let stripped = remainder.trim_start_matches('/');
    if uri.starts_with(LOCAL_FILE_PREFIX)
        && !(style == PathStyle::Windows && has_drive_letter(stripped))
    {
        return Some(format!("/{stripped}"));
    }

    Some(stripped.to_string())
}

fn has_drive_letter(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}
