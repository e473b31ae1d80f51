//! Library-independent certificate descriptor

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use der::asn1::{Ia5StringRef, PrintableStringRef, Utf8StringRef};
use x509_cert::name::Name;

use super::keys::PublicKey;
use super::serial::SerialNumber;

/// Normalized view of the fields callers need from a certificate
///
/// Built fresh by each reconstruction and never mutated afterwards.
/// `not_valid_before <= not_valid_after` is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDescriptor {
    /// Subject distinguished name, as decoded
    pub subject: Name,
    /// Issuer distinguished name, as decoded
    pub issuer: Name,
    /// Embedded public key (RSA or elliptic curve)
    pub public_key: PublicKey,
    /// Start of the validity window, UTC
    pub not_valid_before: DateTime<Utc>,
    /// End of the validity window, UTC
    pub not_valid_after: DateTime<Utc>,
    /// Issuer-assigned serial number
    pub serial_number: SerialNumber,
}

impl CertificateDescriptor {
    /// Subject attributes keyed by short name (`CN`, `O`, `OU`, `C`, `ST`, `L`)
    #[must_use]
    pub fn subject_attributes(&self) -> HashMap<String, String> {
        name_attributes(&self.subject)
    }

    /// Issuer attributes keyed by short name (`CN`, `O`, `OU`, `C`, `ST`, `L`)
    #[must_use]
    pub fn issuer_attributes(&self) -> HashMap<String, String> {
        name_attributes(&self.issuer)
    }

    /// Subject common name
    #[must_use]
    pub fn common_name(&self) -> Option<String> {
        self.subject_attributes().remove("CN")
    }

    /// Whether subject and issuer names are identical
    #[must_use]
    pub fn is_self_issued(&self) -> bool {
        self.subject == self.issuer
    }
}

fn name_attributes(name: &Name) -> HashMap<String, String> {
    const OID_CN: &str = "2.5.4.3";
    const OID_O: &str = "2.5.4.10";
    const OID_OU: &str = "2.5.4.11";
    const OID_C: &str = "2.5.4.6";
    const OID_ST: &str = "2.5.4.8";
    const OID_L: &str = "2.5.4.7";

    let mut attrs = HashMap::new();
    for rdn in &name.0 {
        for atv in rdn.0.iter() {
            let key = match atv.oid.to_string().as_str() {
                OID_CN => "CN",
                OID_O => "O",
                OID_OU => "OU",
                OID_C => "C",
                OID_ST => "ST",
                OID_L => "L",
                _ => continue,
            };

            let value = if let Ok(ps) = PrintableStringRef::try_from(&atv.value) {
                ps.to_string()
            } else if let Ok(utf8s) = Utf8StringRef::try_from(&atv.value) {
                utf8s.to_string()
            } else if let Ok(ia5s) = Ia5StringRef::try_from(&atv.value) {
                ia5s.to_string()
            } else {
                continue;
            };
            attrs.insert(key.to_string(), value);
        }
    }
    attrs
}
