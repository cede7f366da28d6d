//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Immutable point in time, always UTC.
///
/// Timestamps produced by [`Timestamp::now`] carry microsecond precision,
/// matching PostgreSQL `TIMESTAMPTZ`, so a stamped value survives a round
/// trip through storage unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, truncated to microseconds.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses an RFC 3339 string (any offset) into a UTC timestamp.
    pub fn parse_rfc3339(value: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::invalid_format("time", e.to_string()))
    }

    /// Builds a timestamp from Unix seconds plus nanoseconds.
    ///
    /// Returns `None` when the pair is outside chrono's representable range
    /// or `nanos` is negative.
    pub fn from_unix_parts(seconds: i64, nanos: i32) -> Option<Self> {
        let nanos = u32::try_from(nanos).ok()?;
        DateTime::from_timestamp(seconds, nanos).map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Formats as RFC 3339 with full sub-second precision.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().trunc_subsecs(6);
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_now_has_microsecond_precision() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond() % 1_000, 0);
    }

    #[test]
    fn parse_rfc3339_normalizes_to_utc() {
        let ts = Timestamp::parse_rfc3339("2024-03-05T12:30:00.123456+02:00").unwrap();
        assert_eq!(ts.as_datetime().hour(), 10);
        assert_eq!(ts.as_datetime().day(), 5);
        assert_eq!(ts.as_datetime().nanosecond(), 123_456_000);
    }

    #[test]
    fn parse_rfc3339_rejects_garbage() {
        let err = Timestamp::parse_rfc3339("yesterday").unwrap_err();
        assert_eq!(err.field(), "time");
    }

    #[test]
    fn rfc3339_output_parses_back_to_same_instant() {
        let ts = Timestamp::now();
        let parsed = Timestamp::parse_rfc3339(&ts.to_rfc3339()).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn from_unix_parts_accepts_valid_pair() {
        let ts = Timestamp::from_unix_parts(1_700_000_000, 500).unwrap();
        let expected = Utc.timestamp_opt(1_700_000_000, 500).unwrap();
        assert_eq!(ts.as_datetime(), &expected);
    }

    #[test]
    fn from_unix_parts_rejects_negative_nanos() {
        assert!(Timestamp::from_unix_parts(0, -1).is_none());
    }

    #[test]
    fn duration_since_is_signed() {
        let early = Timestamp::from_unix_parts(100, 0).unwrap();
        let late = Timestamp::from_unix_parts(160, 0).unwrap();
        assert_eq!(late.duration_since(&early), Duration::seconds(60));
        assert_eq!(early.duration_since(&late), Duration::seconds(-60));
    }

    #[test]
    fn timestamp_serializes_transparently() {
        let ts = Timestamp::from_unix_parts(0, 0).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"1970-01-01T00:00:00Z\"");
    }
}
