//! Error handling with cause propagation
//!
//! Every failure inside the crate surfaces as a [`CertificateError`]:
//! - one stable external type, whatever library produced the failure
//! - an [`ErrorKind`] naming the failure category
//! - the original error preserved as the `source()` chain
//! - a backtrace captured at creation (feature `full-backtrace`)

pub mod constructors;
pub mod display;
pub mod types;

pub use types::{CertificateError, ErrorKind, Result};
