//! Certificate decoding, validation and descriptor assembly

pub mod descriptor;
pub mod keys;
pub mod reconstruct;
pub mod serial;
pub mod validity;

pub use descriptor::CertificateDescriptor;
pub use keys::{
    EcCurve, EcPrivateKey, EcPublicKey, KeyAlgorithm, PrivateKey, PublicKey, RsaPrivateKey,
    RsaPublicKey,
};
pub use reconstruct::{
    CertificateLoader, CertificateParts, LoadedCertificate, build_descriptor,
    decode_certificate_pem, decode_private_key_pem, reconstruct_certificate,
};
pub use serial::SerialNumber;
pub use validity::RawInstant;
