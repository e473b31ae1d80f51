//! Arbitrary-precision certificate serial numbers

use std::fmt;

/// Certificate serial number as a sign and big-endian magnitude
///
/// Leading zero bytes are dropped, so DER sign padding does not affect equality.
/// Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber {
    negative: bool,
    magnitude: Vec<u8>,
}

impl SerialNumber {
    /// Build a non-negative serial from big-endian magnitude bytes
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self {
            negative: false,
            magnitude: strip_leading_zeros(bytes).to_vec(),
        }
    }

    /// Build from the content octets of a DER INTEGER (two's complement)
    ///
    /// RFC 5280 requires positive serials, but non-conforming issuers do emit
    /// negative ones; the sign is kept instead of reading the bytes as unsigned.
    #[must_use]
    pub fn from_der_bytes(bytes: &[u8]) -> Self {
        match bytes.first() {
            Some(&first) if first >= 0x80 => {
                let mut magnitude: Vec<u8> = bytes.iter().map(|byte| !byte).collect();
                for byte in magnitude.iter_mut().rev() {
                    let (sum, carry) = byte.overflowing_add(1);
                    *byte = sum;
                    if !carry {
                        break;
                    }
                }
                Self {
                    negative: true,
                    magnitude: strip_leading_zeros(&magnitude).to_vec(),
                }
            }
            _ => Self::from_be_bytes(bytes),
        }
    }

    /// Whether the encoded INTEGER was negative
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Minimal big-endian magnitude; empty for zero
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.magnitude
    }

    /// Value as `u128`, if it is non-negative and fits
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        self.magnitude_u128()
    }

    /// Colon-separated upper-case hex of the magnitude, e.g. `30:39` or `-80`
    #[must_use]
    pub fn to_hex(&self) -> String {
        if self.magnitude.is_empty() {
            return "00".to_string();
        }
        let hex = self
            .magnitude
            .iter()
            .map(|byte| hex::encode_upper([*byte]))
            .collect::<Vec<_>>()
            .join(":");
        if self.negative { format!("-{hex}") } else { hex }
    }

    fn magnitude_u128(&self) -> Option<u128> {
        if self.magnitude.len() > 16 {
            return None;
        }
        Some(
            self.magnitude
                .iter()
                .fold(0u128, |acc, &byte| (acc << 8) | u128::from(byte)),
        )
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}

impl From<u64> for SerialNumber {
    fn from(value: u64) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

impl From<u128> for SerialNumber {
    fn from(value: u128) -> Self {
        Self::from_be_bytes(&value.to_be_bytes())
    }
}

/// Decimal rendering
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if let Some(value) = self.magnitude_u128() {
            return write!(f, "{value}");
        }

        // Repeated division by 10 over the byte string
        let mut digits = Vec::new();
        let mut magnitude = self.magnitude.clone();
        while !magnitude.is_empty() {
            let mut remainder = 0u16;
            let mut quotient = Vec::with_capacity(magnitude.len());
            for &byte in &magnitude {
                let current = (remainder << 8) | u16::from(byte);
                let q = current / 10;
                remainder = current % 10;
                if !(quotient.is_empty() && q == 0) {
                    quotient.push(u8::try_from(q).map_err(|_| fmt::Error)?);
                }
            }
            digits.push(char::from(b'0' + u8::try_from(remainder).map_err(|_| fmt::Error)?));
            magnitude = quotient;
        }
        let decimal: String = digits.iter().rev().collect();
        f.write_str(&decimal)
    }
}
