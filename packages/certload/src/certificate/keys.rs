//! Supported key algorithms and key extraction
//!
//! Only RSA and elliptic-curve keys are accepted, for both the public key
//! embedded in a certificate and a separately supplied private key. The closed
//! set lives in [`KeyAlgorithm`]; extending it means adding a variant there and
//! a matching arm in [`PublicKey`] / [`PrivateKey`].

use std::fmt;

use const_oid::ObjectIdentifier;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, SECP_224_R_1, SECP_256_R_1, SECP_384_R_1, SECP_521_R_1};
use const_oid::db::rfc8410::{ID_ED_448, ID_ED_25519, ID_X_448, ID_X_25519};
use der::Encode;
use rustls::pki_types::PrivateKeyDer;
use spki::SubjectPublicKeyInfoOwned;

use crate::error::{CertificateError, ErrorKind, Result};

const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");
const DH_PUBLIC_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10046.2.1");
const SECP_256_K_1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// Asymmetric algorithms accepted for certificate and private keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// RSA (`rsaEncryption`)
    Rsa,
    /// Elliptic curve (`id-ecPublicKey`)
    Ec,
}

impl KeyAlgorithm {
    /// Map an algorithm OID onto the supported set
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnsupportedAlgorithm`] naming the algorithm for any
    /// OID other than RSA or elliptic curve.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        if *oid == RSA_ENCRYPTION {
            Ok(Self::Rsa)
        } else if *oid == ID_EC_PUBLIC_KEY {
            Ok(Self::Ec)
        } else {
            Err(CertificateError::unsupported_algorithm(algorithm_name(oid)))
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rsa => f.write_str("RSA"),
            Self::Ec => f.write_str("EC"),
        }
    }
}

/// Readable name for a public-key algorithm OID
#[must_use]
pub fn algorithm_name(oid: &ObjectIdentifier) -> String {
    let name = if *oid == RSA_ENCRYPTION {
        "RSA"
    } else if *oid == ID_EC_PUBLIC_KEY {
        "EC"
    } else if *oid == ID_DSA {
        "DSA"
    } else if *oid == DH_PUBLIC_NUMBER {
        "DH"
    } else if *oid == ID_ED_25519 {
        "Ed25519"
    } else if *oid == ID_ED_448 {
        "Ed448"
    } else if *oid == ID_X_25519 {
        "X25519"
    } else if *oid == ID_X_448 {
        "X448"
    } else {
        return format!("algorithm {oid}");
    };
    name.to_string()
}

/// Named curve of an elliptic-curve key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// secp224r1
    P224,
    /// secp256r1 / prime256v1
    P256,
    /// secp384r1
    P384,
    /// secp521r1
    P521,
    /// secp256k1
    Secp256k1,
    /// Any other named curve
    Other(ObjectIdentifier),
    /// Key carried no named-curve parameters
    Unspecified,
}

impl EcCurve {
    /// Curve for a named-curve OID
    #[must_use]
    pub fn from_oid(oid: ObjectIdentifier) -> Self {
        match oid {
            SECP_224_R_1 => Self::P224,
            SECP_256_R_1 => Self::P256,
            SECP_384_R_1 => Self::P384,
            SECP_521_R_1 => Self::P521,
            SECP_256_K_1 => Self::Secp256k1,
            other => Self::Other(other),
        }
    }

    fn from_parameters(oid: Option<ObjectIdentifier>) -> Self {
        oid.map_or(Self::Unspecified, Self::from_oid)
    }

    /// Field size in bits, when the curve is known
    #[must_use]
    pub fn key_size(&self) -> Option<u32> {
        match self {
            Self::P224 => Some(224),
            Self::P256 | Self::Secp256k1 => Some(256),
            Self::P384 => Some(384),
            Self::P521 => Some(521),
            Self::Other(_) | Self::Unspecified => None,
        }
    }
}

/// RSA public key taken from a certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    spki_der: Vec<u8>,
    modulus_bits: Option<u32>,
}

impl RsaPublicKey {
    /// Modulus size in bits
    #[must_use]
    pub fn modulus_bits(&self) -> Option<u32> {
        self.modulus_bits
    }
}

/// Elliptic-curve public key taken from a certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    spki_der: Vec<u8>,
    curve: EcCurve,
}

impl EcPublicKey {
    /// Named curve of the key
    #[must_use]
    pub fn curve(&self) -> EcCurve {
        self.curve
    }
}

/// Public key embedded in a certificate, restricted to the supported algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    /// RSA public key
    Rsa(RsaPublicKey),
    /// Elliptic-curve public key
    Ec(EcPublicKey),
}

impl PublicKey {
    /// Validate and extract a certificate's `SubjectPublicKeyInfo`
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnsupportedAlgorithm`] for algorithms other than RSA
    /// or elliptic curve, and [`ErrorKind::MalformedCertificate`] when the
    /// structure cannot be re-encoded.
    pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self> {
        let algorithm = KeyAlgorithm::from_oid(&spki.algorithm.oid)?;
        let spki_der = spki.to_der().map_err(|e| {
            CertificateError::with_source(ErrorKind::MalformedCertificate, e)
                .context("cannot encode subject public key info")
        })?;

        Ok(match algorithm {
            KeyAlgorithm::Rsa => {
                let modulus_bits = spki
                    .subject_public_key
                    .as_bytes()
                    .and_then(|bytes| pkcs1::RsaPublicKey::try_from(bytes).ok())
                    .and_then(|key| bit_length(key.modulus.as_bytes()));
                Self::Rsa(RsaPublicKey {
                    spki_der,
                    modulus_bits,
                })
            }
            KeyAlgorithm::Ec => {
                let named_curve = spki
                    .algorithm
                    .parameters
                    .as_ref()
                    .and_then(|params| params.decode_as::<ObjectIdentifier>().ok());
                Self::Ec(EcPublicKey {
                    spki_der,
                    curve: EcCurve::from_parameters(named_curve),
                })
            }
        })
    }

    /// Algorithm of this key
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Ec(_) => KeyAlgorithm::Ec,
        }
    }

    /// DER-encoded `SubjectPublicKeyInfo`
    #[must_use]
    pub fn spki_der(&self) -> &[u8] {
        match self {
            Self::Rsa(key) => &key.spki_der,
            Self::Ec(key) => &key.spki_der,
        }
    }

    /// Key size in bits (RSA modulus or EC field size)
    #[must_use]
    pub fn key_size(&self) -> Option<u32> {
        match self {
            Self::Rsa(key) => key.modulus_bits,
            Self::Ec(key) => key.curve.key_size(),
        }
    }
}

/// Unencrypted RSA private key
#[derive(Debug, PartialEq, Eq)]
pub struct RsaPrivateKey {
    der: PrivateKeyDer<'static>,
    modulus_bits: Option<u32>,
}

impl RsaPrivateKey {
    /// Modulus size in bits
    #[must_use]
    pub fn modulus_bits(&self) -> Option<u32> {
        self.modulus_bits
    }
}

/// Unencrypted elliptic-curve private key
#[derive(Debug, PartialEq, Eq)]
pub struct EcPrivateKey {
    der: PrivateKeyDer<'static>,
    curve: EcCurve,
}

impl EcPrivateKey {
    /// Named curve of the key
    #[must_use]
    pub fn curve(&self) -> EcCurve {
        self.curve
    }
}

/// Decoded private key, restricted to the supported algorithms
///
/// No pairing with any certificate's public key is checked here.
#[derive(Debug, PartialEq, Eq)]
pub enum PrivateKey {
    /// RSA private key (PKCS#1 or PKCS#8)
    Rsa(RsaPrivateKey),
    /// Elliptic-curve private key (SEC1 or PKCS#8)
    Ec(EcPrivateKey),
}

enum KeyShape {
    Rsa(Option<u32>),
    Ec(EcCurve),
}

impl PrivateKey {
    /// Validate a DER private key and classify its algorithm
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedKey`] when the PKCS#8, PKCS#1 or SEC1
    /// structure does not decode, and [`ErrorKind::UnsupportedAlgorithm`] for
    /// algorithms other than RSA or elliptic curve.
    pub fn from_der(der: PrivateKeyDer<'static>) -> Result<Self> {
        let shape = inspect_private_key(&der)?;
        Ok(match shape {
            KeyShape::Rsa(modulus_bits) => Self::Rsa(RsaPrivateKey { der, modulus_bits }),
            KeyShape::Ec(curve) => Self::Ec(EcPrivateKey { der, curve }),
        })
    }

    /// Algorithm of this key
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            Self::Rsa(_) => KeyAlgorithm::Rsa,
            Self::Ec(_) => KeyAlgorithm::Ec,
        }
    }

    /// Key size in bits (RSA modulus or EC field size)
    #[must_use]
    pub fn key_size(&self) -> Option<u32> {
        match self {
            Self::Rsa(key) => key.modulus_bits,
            Self::Ec(key) => key.curve.key_size(),
        }
    }

    /// Decoded key in its original encoding
    #[must_use]
    pub fn der(&self) -> &PrivateKeyDer<'static> {
        match self {
            Self::Rsa(key) => &key.der,
            Self::Ec(key) => &key.der,
        }
    }

    /// Raw DER bytes of the key
    #[must_use]
    pub fn secret_der(&self) -> &[u8] {
        self.der().secret_der()
    }

    /// Consume the key, returning the DER form for TLS configuration
    #[must_use]
    pub fn into_der(self) -> PrivateKeyDer<'static> {
        match self {
            Self::Rsa(key) => key.der,
            Self::Ec(key) => key.der,
        }
    }
}

fn inspect_private_key(der: &PrivateKeyDer<'_>) -> Result<KeyShape> {
    match der {
        PrivateKeyDer::Pkcs1(key) => Ok(KeyShape::Rsa(rsa_modulus_bits(key.secret_pkcs1_der())?)),
        PrivateKeyDer::Sec1(key) => Ok(KeyShape::Ec(EcCurve::from_parameters(
            sec1_named_curve(key.secret_sec1_der())?,
        ))),
        PrivateKeyDer::Pkcs8(key) => {
            let info = pkcs8::PrivateKeyInfo::try_from(key.secret_pkcs8_der()).map_err(|e| {
                CertificateError::with_source(ErrorKind::MalformedKey, e)
                    .context("invalid PKCS#8 structure")
            })?;
            match KeyAlgorithm::from_oid(&info.algorithm.oid)? {
                KeyAlgorithm::Rsa => Ok(KeyShape::Rsa(rsa_modulus_bits(info.private_key)?)),
                KeyAlgorithm::Ec => {
                    // Inner SEC1 structure must decode even when the curve is in the wrapper
                    let inner_curve = sec1_named_curve(info.private_key)?;
                    let named_curve = info.algorithm.parameters_oid().ok().or(inner_curve);
                    Ok(KeyShape::Ec(EcCurve::from_parameters(named_curve)))
                }
            }
        }
        _ => Err(CertificateError::unsupported_algorithm(
            "unrecognized private key encoding",
        )),
    }
}

fn rsa_modulus_bits(pkcs1_der: &[u8]) -> Result<Option<u32>> {
    let key = pkcs1::RsaPrivateKey::try_from(pkcs1_der).map_err(|e| {
        CertificateError::with_source(ErrorKind::MalformedKey, e)
            .context("invalid PKCS#1 RSA private key")
    })?;
    Ok(bit_length(key.modulus.as_bytes()))
}

fn sec1_named_curve(sec1_der: &[u8]) -> Result<Option<ObjectIdentifier>> {
    let key = sec1::EcPrivateKey::try_from(sec1_der).map_err(|e| {
        CertificateError::with_source(ErrorKind::MalformedKey, e)
            .context("invalid SEC1 EC private key")
    })?;
    Ok(match key.parameters {
        Some(sec1::EcParameters::NamedCurve(oid)) => Some(oid),
        None => None,
    })
}

/// Bit length of a big-endian unsigned integer
fn bit_length(bytes: &[u8]) -> Option<u32> {
    let start = bytes.iter().position(|&b| b != 0)?;
    let significant = bytes.get(start..)?;
    let high_byte = significant.first()?;
    let high_bits = 8 - high_byte.leading_zeros();
    let rest_bits = u32::try_from(significant.len().checked_sub(1)?.checked_mul(8)?).ok()?;
    Some(high_bits + rest_bits)
}
