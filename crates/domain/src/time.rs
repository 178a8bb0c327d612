//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::Serializer;

/// UTC timestamp attached to every response payload.
pub type Timestamp = DateTime<Utc>;

/// Naive ISO-8601 with microsecond precision, always in UTC.
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp the way it appears on the wire, e.g.
/// `2024-01-01T00:00:00.000000`.
#[must_use]
pub fn to_iso(ts: Timestamp) -> String {
    ts.format(ISO_FORMAT).to_string()
}

/// `serialize_with` helper emitting [`to_iso`] output.
///
/// # Errors
///
/// Propagates the serializer's own error.
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso(*ts))
}
