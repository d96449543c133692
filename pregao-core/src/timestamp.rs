use std::fmt;

use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PregaoError;

/// Instant at which a price was observed, held at millisecond precision in UTC.
///
/// Always renders as `YYYY-MM-DDTHH:MM:SS.mmmZ`, whatever precision or offset
/// the provider used. Only years 0000 through 9999 fit that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PricedAt(DateTime<Utc>);

impl PricedAt {
    /// Truncate the instant to whole milliseconds.
    ///
    /// # Errors
    /// Returns `Data` when the year falls outside 0000..=9999.
    pub fn new(ts: DateTime<Utc>) -> Result<Self, PregaoError> {
        if !(0..=9999).contains(&ts.year()) {
            return Err(PregaoError::data(format!(
                "timestamp out of four-digit year range: {ts}"
            )));
        }
        Ok(Self(ts.trunc_subsecs(3)))
    }

    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// The underlying UTC instant.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar date of the instant in UTC.
    #[must_use]
    pub fn date(&self) -> chrono::NaiveDate {
        self.0.date_naive()
    }
}

impl TryFrom<DateTime<Utc>> for PricedAt {
    type Error = PregaoError;

    fn try_from(ts: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::new(ts)
    }
}

impl fmt::Display for PricedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for PricedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PricedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let ts = DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)?;
        Self::new(ts.with_timezone(&Utc)).map_err(serde::de::Error::custom)
    }
}
