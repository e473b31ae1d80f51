//! Validity timestamp normalization
//!
//! Decoders may hand back validity instants with or without an offset. Both
//! forms collapse to `DateTime<Utc>`: naive values get UTC attached (wall clock
//! unchanged), offset-aware values are converted.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use x509_cert::time::Time;

use crate::error::{CertificateError, Result};

/// Instant as produced by a decoder, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInstant {
    /// No timezone information
    Naive(NaiveDateTime),
    /// Carries an explicit UTC offset
    Aware(DateTime<FixedOffset>),
}

impl RawInstant {
    /// Read an X.509 `Time` field as a naive instant
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::MalformedCertificate`] if the encoded date is
    /// not representable.
    pub fn from_x509_time(time: &Time) -> Result<Self> {
        let dt = time.to_date_time();
        NaiveDate::from_ymd_opt(
            i32::from(dt.year()),
            u32::from(dt.month()),
            u32::from(dt.day()),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(dt.hour()),
                u32::from(dt.minutes()),
                u32::from(dt.seconds()),
            )
        })
        .map(Self::Naive)
        .ok_or_else(|| {
            CertificateError::malformed_certificate()
                .context(format!("validity time out of range: {dt}"))
        })
    }

    /// Whether the instant lacks timezone information
    #[must_use]
    pub fn is_naive(&self) -> bool {
        matches!(self, Self::Naive(_))
    }

    /// Timezone-aware UTC form
    #[must_use]
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            Self::Naive(naive) => naive.and_utc(),
            Self::Aware(aware) => aware.with_timezone(&Utc),
        }
    }
}

impl From<NaiveDateTime> for RawInstant {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for RawInstant {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Self::Aware(aware)
    }
}
