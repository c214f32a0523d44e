// Time Converter - Logic Layer
// Normalizes any supported input into an instant, then projects it onto
// Unix seconds/milliseconds, local and UTC calendar strings, zone and DST.

pub mod display;
pub mod validation;

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use chrono_english::{parse_date_string, Dialect};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::TimeConversionResult;

pub use display::format_utc_datetime_display;
pub use validation::{is_valid_datetime, is_valid_unix_milliseconds, is_valid_unix_seconds};

/// Source of wall-clock time. The only way "now" enters the engines.
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Calendar date of "now" in `zone`
    fn today(&self, zone: Tz) -> AppResult<NaiveDate> {
        Ok(instant_from_millis(self.now_millis())?.with_timezone(&zone).date_naive())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
const I64_MIN_AS_F64: f64 = i64::MIN as f64;
const I64_MAX_AS_F64: f64 = i64::MAX as f64;

pub(crate) fn instant_from_millis(ms: i64) -> AppResult<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| AppError::InvalidDatetime(format!("{} ms is out of range", ms)))
}

/// Converter bound to one IANA time zone, used for every "local" projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeConverter {
    zone: Tz,
}

impl TimeConverter {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Converter for the system's IANA zone (e.g. "Asia/Seoul").
    /// Falls back to UTC if the zone cannot be detected.
    pub fn system() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(zone) => Self::new(zone),
                Err(_) => {
                    tracing::warn!(zone = %name, "system timezone not in tz database, using UTC");
                    Self::new(Tz::UTC)
                }
            },
            Err(e) => {
                tracing::warn!(error = ?e, "failed to detect system timezone, using UTC");
                Self::new(Tz::UTC)
            }
        }
    }

    pub fn from_zone_name(name: &str) -> AppResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| AppError::InvalidInput(format!("Unknown time zone: {}", name)))
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// IANA id of the zone (e.g. "America/Los_Angeles")
    pub fn zone_name(&self) -> &'static str {
        self.zone.name()
    }

    pub fn current_time(&self) -> AppResult<TimeConversionResult> {
        self.current_time_with(&SystemClock)
    }

    pub fn current_time_with(&self, clock: &dyn Clock) -> AppResult<TimeConversionResult> {
        self.from_unix_milliseconds(clock.now_millis())
    }

    /// Seconds may be fractional; the instant is floored to the millisecond.
    pub fn from_unix_seconds(&self, seconds: f64) -> AppResult<TimeConversionResult> {
        if !seconds.is_finite() {
            return Err(AppError::InvalidInput(format!("{} is not a finite number of seconds", seconds)));
        }

        let ms = (seconds * 1000.0).floor();
        if !(I64_MIN_AS_F64..I64_MAX_AS_F64).contains(&ms) {
            return Err(AppError::InvalidDatetime(format!("{} s is out of range", seconds)));
        }

        self.from_unix_milliseconds(ms as i64)
    }

    pub fn from_unix_milliseconds(&self, ms: i64) -> AppResult<TimeConversionResult> {
        Ok(self.project(&instant_from_millis(ms)?))
    }

    /// Interpret `YYYY-MM-DDTHH:mm[:ss]` (no offset) as wall time in this zone.
    ///
    /// Ambiguous wall times resolve to the earlier instant; wall times inside
    /// a spring-forward gap move one hour ahead.
    pub fn from_local_datetime(&self, text: &str) -> AppResult<TimeConversionResult> {
        let naive = validation::parse_naive_datetime(text)
            .ok_or_else(|| AppError::InvalidDatetime(text.to_string()))?;

        let local = self.resolve_local(&naive, text)?;
        Ok(self.project(&local.with_timezone(&Utc)))
    }

    // Pin a wall time to this zone, handling DST folds and gaps
    fn resolve_local(&self, naive: &NaiveDateTime, input: &str) -> AppResult<DateTime<Tz>> {
        match self.zone.from_local_datetime(naive) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => {
                tracing::debug!(input, zone = self.zone_name(), "local time falls in a DST gap");
                naive
                    .checked_add_signed(Duration::hours(1))
                    .and_then(|shifted| self.zone.from_local_datetime(&shifted).earliest())
                    .ok_or_else(|| AppError::InvalidDatetime(input.to_string()))
            }
        }
    }

    /// Parse an RFC 3339 timestamp. Input without an offset is read as UTC.
    pub fn from_utc_datetime(&self, text: &str) -> AppResult<TimeConversionResult> {
        let trimmed = text.trim();

        let instant = match DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => dt.with_timezone(&Utc),
            Err(_) => {
                let naive = validation::parse_naive_datetime(trimmed)
                    .ok_or_else(|| AppError::InvalidDatetime(text.to_string()))?;
                Utc.from_utc_datetime(&naive)
            }
        };

        Ok(self.project(&instant))
    }

    /// Parse natural language ("tomorrow 5pm", "next friday") relative to
    /// `reference_ms`, read as wall time in this zone.
    pub fn from_natural_language(&self, text: &str, reference_ms: i64) -> AppResult<TimeConversionResult> {
        let local_now = instant_from_millis(reference_ms)?.with_timezone(&self.zone);
        let now = local_now.with_timezone(&local_now.offset().fix());

        let parsed = parse_date_string(text.trim(), now, Dialect::Us)
            .map_err(|e| AppError::InvalidDatetime(format!("{}: {}", text, e)))?;

        // The parsed wall time may sit on the other side of a DST change
        let local = self.resolve_local(&parsed.naive_local(), text)?;
        Ok(self.project(&local.with_timezone(&Utc)))
    }

    /// Best-effort DST detection.
    ///
    /// Compares the instant's UTC offset with the offsets on January 1 and
    /// July 1 of the same local year; the smaller of the two is taken as
    /// standard time. This is a heuristic, not a tz-database DST flag.
    pub fn is_dst(&self, instant: &DateTime<Utc>) -> bool {
        let year = instant.with_timezone(&self.zone).year();

        let offset_on = |month: u32| -> Option<i32> {
            let probe = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
            Some(self.offset_seconds(&Utc.from_utc_datetime(&probe)))
        };

        let (Some(january), Some(july)) = (offset_on(1), offset_on(7)) else {
            return false;
        };

        let standard = january.min(july);
        self.offset_seconds(instant) > standard
    }

    fn offset_seconds(&self, instant: &DateTime<Utc>) -> i32 {
        self.zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
    }

    /// Short zone abbreviation at `instant` (e.g. "PST", "PDT")
    pub fn zone_abbreviation(&self, instant: &DateTime<Utc>) -> String {
        instant.with_timezone(&self.zone).format("%Z").to_string()
    }

    fn project(&self, instant: &DateTime<Utc>) -> TimeConversionResult {
        let local = instant.with_timezone(&self.zone);
        let unix_milliseconds = instant.timestamp_millis();

        TimeConversionResult {
            unix_seconds: unix_milliseconds.div_euclid(1000),
            unix_milliseconds,
            local_datetime: local.format("%Y-%m-%dT%H:%M:%S").to_string(),
            utc_datetime: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            timezone: self.zone_abbreviation(instant),
            is_dst: self.is_dst(instant),
        }
    }
}

pub fn get_current_time() -> AppResult<TimeConversionResult> {
    TimeConverter::system().current_time()
}

pub fn from_unix_seconds(seconds: f64) -> AppResult<TimeConversionResult> {
    TimeConverter::system().from_unix_seconds(seconds)
}

pub fn from_unix_milliseconds(ms: i64) -> AppResult<TimeConversionResult> {
    TimeConverter::system().from_unix_milliseconds(ms)
}

pub fn from_local_datetime(text: &str) -> AppResult<TimeConversionResult> {
    TimeConverter::system().from_local_datetime(text)
}

pub fn from_utc_datetime(text: &str) -> AppResult<TimeConversionResult> {
    TimeConverter::system().from_utc_datetime(text)
}

pub fn format_local_datetime_display(result: &TimeConversionResult) -> AppResult<String> {
    TimeConverter::system().format_local_display(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Los_Angeles;
    use chrono_tz::Australia::Sydney;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn la() -> TimeConverter {
        TimeConverter::new(Los_Angeles)
    }

    #[test]
    fn test_epoch() {
        let result = TimeConverter::new(Tz::UTC).from_unix_seconds(0.0).unwrap();
        assert_eq!(result.unix_milliseconds, 0);
        assert_eq!(result.unix_seconds, 0);
        assert_eq!(result.utc_datetime, "1970-01-01T00:00:00.000Z");
        assert_eq!(result.local_datetime, "1970-01-01T00:00:00");
        assert_eq!(result.timezone, "UTC");
        assert!(!result.is_dst);
    }

    #[test]
    fn test_new_year_2022() {
        let result = la().from_unix_seconds(1640995200.0).unwrap();
        assert!(result.utc_datetime.contains("2022-01-01"));
        assert_eq!(result.local_datetime, "2021-12-31T16:00:00");
        assert_eq!(result.timezone, "PST");
        assert!(!result.is_dst);
    }

    #[test]
    fn test_summer_is_dst() {
        // 2022-07-01T12:00:00Z
        let result = la().from_unix_seconds(1656676800.0).unwrap();
        assert_eq!(result.timezone, "PDT");
        assert!(result.is_dst);
        assert_eq!(result.local_datetime, "2022-07-01T05:00:00");
    }

    #[test]
    fn test_southern_hemisphere_heuristic() {
        // Heuristic only: Sydney observes DST in January
        let sydney = TimeConverter::new(Sydney);
        assert!(sydney.from_unix_seconds(1641038400.0).unwrap().is_dst);
        assert!(!sydney.from_unix_seconds(1656676800.0).unwrap().is_dst);
    }

    #[test]
    fn test_unix_seconds_floor_for_negative_millis() {
        let result = TimeConverter::new(Tz::UTC).from_unix_milliseconds(-1).unwrap();
        assert_eq!(result.unix_seconds, -1);
        assert_eq!(result.utc_datetime, "1969-12-31T23:59:59.999Z");
    }

    #[test]
    fn test_fractional_unix_seconds() {
        let result = TimeConverter::new(Tz::UTC).from_unix_seconds(1640995200.5).unwrap();
        assert_eq!(result.unix_milliseconds, 1640995200500);
        assert_eq!(result.unix_seconds, 1640995200);
        assert_eq!(result.utc_datetime, "2022-01-01T00:00:00.500Z");

        let before_epoch = TimeConverter::new(Tz::UTC).from_unix_seconds(-0.5).unwrap();
        assert_eq!(before_epoch.unix_milliseconds, -500);
        assert_eq!(before_epoch.unix_seconds, -1);
    }

    #[test]
    fn test_non_finite_unix_seconds() {
        assert!(matches!(la().from_unix_seconds(f64::NAN), Err(AppError::InvalidInput(_))));
        assert!(matches!(la().from_unix_seconds(f64::INFINITY), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_millisecond_precision() {
        let result = TimeConverter::new(Tz::UTC).from_unix_milliseconds(1640995200123).unwrap();
        assert_eq!(result.unix_seconds, 1640995200);
        assert_eq!(result.utc_datetime, "2022-01-01T00:00:00.123Z");
    }

    #[test]
    fn test_from_local_datetime() {
        let result = la().from_local_datetime("2022-01-01T00:00:00").unwrap();
        assert_eq!(result.unix_seconds, 1641024000);
        assert_eq!(result.utc_datetime, "2022-01-01T08:00:00.000Z");

        let without_seconds = la().from_local_datetime("2022-01-01T00:00").unwrap();
        assert_eq!(without_seconds, result);
    }

    #[test]
    fn test_local_datetime_in_dst_gap_moves_forward() {
        // 02:30 does not exist on 2022-03-13 in Los Angeles
        let result = la().from_local_datetime("2022-03-13T02:30:00").unwrap();
        assert_eq!(result.local_datetime, "2022-03-13T03:30:00");
        assert!(result.is_dst);
    }

    #[test]
    fn test_ambiguous_local_datetime_takes_earlier() {
        // 01:30 happens twice on 2022-11-06 in Los Angeles
        let result = la().from_local_datetime("2022-11-06T01:30:00").unwrap();
        assert_eq!(result.utc_datetime, "2022-11-06T08:30:00.000Z");
        assert_eq!(result.timezone, "PDT");
    }

    #[test]
    fn test_from_utc_datetime() {
        let result = la().from_utc_datetime("2022-01-01T00:00:00.000Z").unwrap();
        assert_eq!(result.unix_seconds, 1640995200);

        let with_offset = la().from_utc_datetime("2022-01-01T09:00:00+09:00").unwrap();
        assert_eq!(with_offset.unix_seconds, 1640995200);

        let no_offset = la().from_utc_datetime("2022-01-01T00:00:00").unwrap();
        assert_eq!(no_offset.unix_seconds, 1640995200);
    }

    #[test]
    fn test_invalid_datetime_is_an_error() {
        assert!(matches!(la().from_local_datetime("not a date"), Err(AppError::InvalidDatetime(_))));
        assert!(matches!(la().from_local_datetime("2022-02-30T10:00"), Err(AppError::InvalidDatetime(_))));
        assert!(matches!(la().from_utc_datetime("2022-13-01T00:00:00Z"), Err(AppError::InvalidDatetime(_))));
    }

    #[test]
    fn test_out_of_range_instant() {
        assert!(matches!(la().from_unix_seconds(1e300), Err(AppError::InvalidDatetime(_))));
        assert!(matches!(la().from_unix_seconds(i64::MAX as f64), Err(AppError::InvalidDatetime(_))));
        assert!(matches!(la().from_unix_milliseconds(i64::MAX), Err(AppError::InvalidDatetime(_))));
    }

    #[test]
    fn test_current_time_uses_clock() {
        let result = la().current_time_with(&FixedClock(1640995200000)).unwrap();
        assert_eq!(result.unix_seconds, 1640995200);
    }

    #[test]
    fn test_clock_today_in_zone() {
        let clock = FixedClock(1640995200000);
        assert_eq!(clock.today(Tz::UTC).unwrap(), NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(clock.today(Los_Angeles).unwrap(), NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
    }

    #[test]
    fn test_zone_lookup() {
        assert_eq!(TimeConverter::from_zone_name("Asia/Tokyo").unwrap().zone_name(), "Asia/Tokyo");
        assert!(matches!(TimeConverter::from_zone_name("Mars/Olympus"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_natural_language_relative_to_reference() {
        // 2022-01-01T12:00:00 in Los Angeles
        let reference = 1641067200000;
        let result = la().from_natural_language("tomorrow", reference).unwrap();
        assert!(result.unix_milliseconds > reference);
        assert!(result.unix_milliseconds <= reference + 2 * 86_400_000);
        assert!(result.local_datetime.starts_with("2022-01-02"));

        assert!(matches!(
            la().from_natural_language("florp blarg", reference),
            Err(AppError::InvalidDatetime(_))
        ));
    }
}
