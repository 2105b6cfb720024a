//! Timestamp normalization for real-world feed dates.
//!
//! Feeds ship RFC 2822, ISO-8601, and assorted bare formats - or nothing
//! at all. Parse failure is not an error here: an entry without a usable
//! date is still ingested, it just carries no timestamp.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use super::entry::{present, RawEntry};

/// Outcome of timestamp normalization.
///
/// Exactly two cases by design: either a canonical UTC instant or an
/// explicit absence. There is no failure variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    Parsed(DateTime<Utc>),
    Absent,
}

impl Published {
    /// Normalize an entry's timestamp, preferring `published` over
    /// `updated`. Empty strings count as missing.
    pub fn from_entry(entry: &RawEntry) -> Self {
        match present(entry.published.as_deref()).or_else(|| present(entry.updated.as_deref())) {
            Some(raw) => parse_timestamp(raw),
            None => Published::Absent,
        }
    }

    /// Render as ISO-8601 with an explicit UTC offset (`+00:00`).
    pub fn to_iso8601(&self) -> Option<String> {
        match self {
            Published::Parsed(instant) => {
                Some(instant.to_rfc3339_opts(SecondsFormat::Secs, false))
            }
            Published::Absent => None,
        }
    }
}

/// Timezone-less formats seen in the wild.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse one raw timestamp string permissively.
///
/// Zoned values are converted to UTC; naive values are assumed to already
/// be UTC and only labeled as such. Anything unparseable is `Absent`.
pub fn parse_timestamp(raw: &str) -> Published {
    let raw = raw.trim();
    if raw.is_empty() {
        return Published::Absent;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc2822(raw) {
        return Published::Parsed(zoned.with_timezone(&Utc));
    }
    // RFC 2822 with a day-of-week name that contradicts the date: feeds
    // get this wrong routinely, and the date wins. The day-of-week part
    // is optional in RFC 2822, so retry without it.
    if let Some((_, rest)) = raw.split_once(',') {
        if let Ok(zoned) = DateTime::parse_from_rfc2822(rest.trim_start()) {
            return Published::Parsed(zoned.with_timezone(&Utc));
        }
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Published::Parsed(zoned.with_timezone(&Utc));
    }

    for &format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Published::Parsed(naive.and_utc());
        }
    }

    // Date-only strings normalize to midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Published::Parsed(naive.and_utc());
        }
    }

    Published::Absent
}
