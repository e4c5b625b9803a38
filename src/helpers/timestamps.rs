use chrono::{DateTime, NaiveDateTime};

/// A timestamp field that could not be parsed. Expected data-quality
/// noise from the inventory APIs, not an operational failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnparseableTimestamp;

const BARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse one resource timestamp into the naive comparison space.
///
/// RFC 3339 strings keep their wall-clock reading and drop the offset;
/// all recency comparisons happen in that offset-less space.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, UnparseableTimestamp> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.naive_local());
    }

    for format in BARE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }

    Err(UnparseableTimestamp)
}
