use super::{instant_from_millis, TimeConverter};
use crate::shared::error::AppResult;
use crate::shared::types::TimeConversionResult;

// 24-hour clock, e.g. "Jan 01, 2022, 16:00:00"
const DISPLAY_FORMAT: &str = "%b %d, %Y, %H:%M:%S";

impl TimeConverter {
    /// Human-readable local time: "Dec 31, 2021, 16:00:00 PST (STD)"
    pub fn format_local_display(&self, result: &TimeConversionResult) -> AppResult<String> {
        let instant = instant_from_millis(result.unix_milliseconds)?;
        let local = instant.with_timezone(&self.zone());
        let season = if self.is_dst(&instant) { "DST" } else { "STD" };

        Ok(format!(
            "{} {} ({})",
            local.format(DISPLAY_FORMAT),
            self.zone_abbreviation(&instant),
            season
        ))
    }
}

/// Human-readable UTC time: "Jan 01, 2022, 00:00:00 UTC"
pub fn format_utc_datetime_display(result: &TimeConversionResult) -> AppResult<String> {
    let instant = instant_from_millis(result.unix_milliseconds)?;
    Ok(format!("{} UTC", instant.format(DISPLAY_FORMAT)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Los_Angeles;

    #[test]
    fn test_local_display_standard_time() {
        let converter = TimeConverter::new(Los_Angeles);
        let result = converter.from_unix_seconds(1640995200.0).unwrap();
        assert_eq!(
            converter.format_local_display(&result).unwrap(),
            "Dec 31, 2021, 16:00:00 PST (STD)"
        );
    }

    #[test]
    fn test_local_display_daylight_time() {
        let converter = TimeConverter::new(Los_Angeles);
        let result = converter.from_unix_seconds(1656676800.0).unwrap();
        assert_eq!(
            converter.format_local_display(&result).unwrap(),
            "Jul 01, 2022, 05:00:00 PDT (DST)"
        );
    }

    #[test]
    fn test_utc_display() {
        let result = TimeConverter::new(Los_Angeles).from_unix_seconds(0.0).unwrap();
        assert_eq!(format_utc_datetime_display(&result).unwrap(), "Jan 01, 1970, 00:00:00 UTC");
    }
}
