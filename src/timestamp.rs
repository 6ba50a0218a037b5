//! Timestamp normalization for both export formats.
//!
//! Discord exports carry textual RFC 3339-style timestamps with up to nine
//! fractional digits; chrono only needs the first six, so the normalizer
//! anchors on the microsecond group and the offset group and discards
//! whatever sits between them (truncation, not rounding). Instagram
//! timestamps are epoch milliseconds and only need a unit conversion.

use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use crate::error::{ChatstatsError, Result};

/// Matches `YYYY-MM-DDTHH:MM:SS.ffffff`, optional stray fractional digits,
/// and a `±HH:MM` offset. Compiled once; immutable.
static DISCORD_TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{6})\d*([+-]\d{2}:\d{2})$")
        .expect("timestamp pattern is valid")
});

/// Parses a Discord export timestamp into epoch seconds.
///
/// Fractional digits beyond the first six are discarded; the remaining
/// string is parsed as a timezone-aware instant and flattened to whole
/// epoch seconds (UTC).
///
/// # Example
///
/// ```
/// use chatstats::timestamp::parse_discord_timestamp;
///
/// let a = parse_discord_timestamp("2023-05-01T12:00:00.123456789+02:00").unwrap();
/// let b = parse_discord_timestamp("2023-05-01T12:00:00.123456+02:00").unwrap();
/// assert_eq!(a, b);
/// ```
///
/// # Errors
///
/// Returns [`ChatstatsError::InvalidTimestamp`] when the input does not
/// match the expected pattern (missing offset, wrong digit counts) or the
/// matched fields do not form a real instant.
pub fn parse_discord_timestamp(raw: &str) -> Result<i64> {
    let caps = DISCORD_TIMESTAMP_RE
        .captures(raw)
        .ok_or_else(|| ChatstatsError::invalid_timestamp(raw))?;

    let normalized = format!("{}{}", &caps[1], &caps[2]);
    let instant = DateTime::parse_from_rfc3339(&normalized)
        .map_err(|_| ChatstatsError::invalid_timestamp(raw))?;

    Ok(instant.timestamp())
}

/// Converts Instagram's epoch milliseconds to epoch seconds.
///
/// Integer division truncating toward zero; there is no failure mode for
/// numeric input. Non-numeric `timestamp_ms` values are rejected by the
/// Instagram parser before reaching this function.
pub fn epoch_seconds_from_millis(ms: i64) -> i64 {
    ms / 1000
}
