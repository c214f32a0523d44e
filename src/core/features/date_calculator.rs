//! Date arithmetic: whole-day differences and day offsets
//!
//! Works on calendar dates only, so DST shifts can never produce an
//! off-by-one. "Today" is supplied by the caller (see `Clock::today`).

use chrono::{Days, NaiveDate};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{DateDifference, DateOffset};

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDatetime(text.to_string()))
}

/// Signed number of days from `from` to `to`, positive when `to` is later
pub fn days_between(from: NaiveDate, to: NaiveDate) -> DateDifference {
    let days = to.signed_duration_since(from).num_days();

    let summary = match days {
        0 => "Same day".to_string(),
        1 => "+1 day".to_string(),
        -1 => "-1 day".to_string(),
        d if d > 0 => format!("+{} days", d),
        d => format!("{} days", d),
    };

    DateDifference { days, summary }
}

/// The calendar date `days` after (or before, when negative) `from`
pub fn add_days(from: NaiveDate, days: i64) -> AppResult<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let end = if days >= 0 {
        from.checked_add_days(magnitude)
    } else {
        from.checked_sub_days(magnitude)
    };

    end.ok_or_else(|| {
        AppError::InvalidInput(format!("{} days from {} is outside the supported calendar", days, from))
    })
}

/// Offset `from` by `days` and render the result for display
pub fn offset_date(from: NaiveDate, days: i64) -> AppResult<DateOffset> {
    let end = add_days(from, days)?;

    tracing::debug!(%from, days, %end, "computed date offset");

    Ok(DateOffset {
        end_date: end.format("%Y-%m-%d").to_string(),
        display: end.format("%A, %B %-d, %Y").to_string(),
    })
}
