use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 2100-01-01T00:00:00Z
const MAX_UNIX_SECONDS: f64 = 4_102_444_800.0;
const MAX_UNIX_MILLISECONDS: f64 = 4_102_444_800_000.0;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar datetime without offset. A bare date means midnight.
pub(crate) fn parse_naive_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn is_number_in_range(text: &str, max: f64) -> bool {
    match text.trim().parse::<f64>() {
        Ok(value) => value.is_finite() && (0.0..=max).contains(&value),
        Err(_) => false,
    }
}

/// Numeric, finite and within 1970..=2100 as Unix seconds. Empty text is invalid.
pub fn is_valid_unix_seconds(text: &str) -> bool {
    is_number_in_range(text, MAX_UNIX_SECONDS)
}

/// Numeric, finite and within 1970..=2100 as Unix milliseconds
pub fn is_valid_unix_milliseconds(text: &str) -> bool {
    is_number_in_range(text, MAX_UNIX_MILLISECONDS)
}

/// True when `text` parses as a calendar datetime, with or without offset
pub fn is_valid_datetime(text: &str) -> bool {
    parse_naive_datetime(text).is_some() || DateTime::parse_from_rfc3339(text.trim()).is_ok()
}
