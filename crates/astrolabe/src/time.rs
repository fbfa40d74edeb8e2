//! Civil date/time normalization.
//!
//! Local wall-clock time in an IANA zone is converted to UTC and then to a
//! Julian Day, which is what the ephemeris provider consumes.

use crate::ephemeris::types::JulianDay;
use crate::error::ChartError;
use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Civil calendar date as entered by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Civil wall-clock time as entered by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_naive(self) -> Result<NaiveDate, ChartError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            ChartError::invalid_time(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            ))
        })
    }
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn to_naive(self) -> Result<NaiveTime, ChartError> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).ok_or_else(|| {
            ChartError::invalid_time(format!(
                "{:02}:{:02}:{:02} is not a valid time of day",
                self.hour, self.minute, self.second
            ))
        })
    }
}

/// Parse an IANA zone identifier such as `Europe/Paris`
pub fn parse_timezone(tz_id: &str) -> Result<Tz, ChartError> {
    tz_id
        .parse::<Tz>()
        .map_err(|e| ChartError::invalid_time(format!("unrecognized timezone '{}': {}", tz_id, e)))
}

/// Convert local civil time in `tz_id` to UTC.
///
/// Times repeated by a DST fall-back resolve to the standard-time reading;
/// times skipped by a spring-forward gap are rejected.
pub fn civil_to_utc(
    date: CivilDate,
    time: CivilTime,
    tz_id: &str,
) -> Result<DateTime<Utc>, ChartError> {
    let tz = parse_timezone(tz_id)?;
    let naive = NaiveDateTime::new(date.to_naive()?, time.to_naive()?);

    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, standard) => {
            log::debug!("{} is ambiguous in {}, using standard time", naive, tz_id);
            standard
        }
        LocalResult::None => {
            return Err(ChartError::invalid_time(format!(
                "{} does not exist in {} (DST gap)",
                naive, tz_id
            )))
        }
    };

    Ok(local.with_timezone(&Utc))
}

/// Civil date/time/zone to the provider's continuous instant.
pub fn normalize(date: CivilDate, time: CivilTime, tz_id: &str) -> Result<JulianDay, ChartError> {
    let utc = civil_to_utc(date, time, tz_id)?;
    let jd = utc_to_julian_day(utc);
    log::debug!("{:?} {:?} {} -> {}", date, time, tz_id, jd);
    Ok(jd)
}

/// Convert UTC datetime to Julian Day
pub fn utc_to_julian_day(dt: DateTime<Utc>) -> JulianDay {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9;
    JulianDay(seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD)
}

/// Convert Julian Day to UTC datetime, rounded to the nearest second
pub fn julian_day_to_utc(jd: JulianDay) -> Result<DateTime<Utc>, ChartError> {
    let seconds = ((jd.value() - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round();
    if !seconds.is_finite() {
        return Err(ChartError::invalid_time(format!("{} is not a finite instant", jd)));
    }
    DateTime::<Utc>::from_timestamp(seconds as i64, 0)
        .ok_or_else(|| ChartError::invalid_time(format!("{} is out of range", jd)))
}

/// Local wall-clock time in `tz_id` for an instant
pub fn julian_day_to_civil(jd: JulianDay, tz_id: &str) -> Result<NaiveDateTime, ChartError> {
    let tz = parse_timezone(tz_id)?;
    Ok(julian_day_to_utc(jd)?.with_timezone(&tz).naive_local())
}

/// Noon UTC on `date`; transit sampling is anchored here to stay clear of day boundaries.
pub fn noon_utc(date: NaiveDate) -> JulianDay {
    let noon = NaiveDateTime::new(date, NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
    utc_to_julian_day(Utc.from_utc_datetime(&noon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Timelike;

    #[test]
    fn test_j2000_epoch() {
        // 2000-01-01 12:00 UT is JD 2451545.0
        let jd = normalize(CivilDate::new(2000, 1, 1), CivilTime::new(12, 0, 0), "UTC").unwrap();
        assert_abs_diff_eq!(jd.value(), 2_451_545.0, epsilon = 1e-9);
    }

    #[test]
    fn test_timezone_offset_applied() {
        // Paris is UTC+2 in June
        let paris = normalize(
            CivilDate::new(1990, 6, 28),
            CivilTime::new(14, 30, 0),
            "Europe/Paris",
        )
        .unwrap();
        let utc = normalize(CivilDate::new(1990, 6, 28), CivilTime::new(12, 30, 0), "UTC").unwrap();
        assert_abs_diff_eq!(paris.value(), utc.value(), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_calendar_input() {
        let err = normalize(CivilDate::new(2021, 1, 32), CivilTime::new(0, 0, 0), "UTC").unwrap_err();
        assert!(matches!(err, ChartError::InvalidTime { .. }));
        let err = normalize(CivilDate::new(2021, 2, 29), CivilTime::new(0, 0, 0), "UTC").unwrap_err();
        assert!(matches!(err, ChartError::InvalidTime { .. }));
        let err = normalize(CivilDate::new(2021, 1, 1), CivilTime::new(24, 0, 0), "UTC").unwrap_err();
        assert!(matches!(err, ChartError::InvalidTime { .. }));
    }

    #[test]
    fn test_unknown_timezone() {
        let err = normalize(
            CivilDate::new(2021, 1, 1),
            CivilTime::new(0, 0, 0),
            "Mars/Olympus_Mons",
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidTime { .. }));
    }

    #[test]
    fn test_dst_gap_rejected() {
        // 02:30 did not happen in New York on 2021-03-14
        let err = normalize(
            CivilDate::new(2021, 3, 14),
            CivilTime::new(2, 30, 0),
            "America/New_York",
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidTime { .. }));
    }

    #[test]
    fn test_dst_overlap_uses_standard_time() {
        // 01:30 happened twice in New York on 2021-11-07; EST reading is 06:30 UTC
        let utc = civil_to_utc(
            CivilDate::new(2021, 11, 7),
            CivilTime::new(1, 30, 0),
            "America/New_York",
        )
        .unwrap();
        assert_eq!(utc.hour(), 6);
        assert_eq!(utc.minute(), 30);
    }

    #[test]
    fn test_round_trip_preserves_wall_clock() {
        let cases = [
            (CivilDate::new(1990, 6, 28), CivilTime::new(14, 30, 0), "Europe/Paris"),
            (CivilDate::new(1985, 12, 31), CivilTime::new(23, 59, 59), "Asia/Tokyo"),
            (CivilDate::new(2004, 2, 29), CivilTime::new(0, 0, 1), "America/Los_Angeles"),
            (CivilDate::new(1969, 7, 20), CivilTime::new(20, 17, 40), "UTC"),
        ];
        for (date, time, tz) in cases {
            let jd = normalize(date, time, tz).unwrap();
            let back = julian_day_to_civil(jd, tz).unwrap();
            assert_eq!(back.date(), date.to_naive().unwrap());
            assert_eq!(back.time(), time.to_naive().unwrap());
        }
    }

    #[test]
    fn test_noon_anchor() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_abs_diff_eq!(noon_utc(date).value(), 2_451_545.0, epsilon = 1e-9);
    }
}
