// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar ↔ Julian Day conversions.
//!
//! Dates before 1582-10-15 are read in the proleptic **Julian** calendar,
//! later ones in the **Gregorian** calendar, which is how historical ΔT
//! tables are indexed. Astronomical year numbering is used (year 0 = 1 BCE).
//!
//! The integer algorithms follow *Numerical Recipes in C* (2nd ed., §1.2),
//! computed in `i64` so the whole simulated range stays overflow free.

use crate::error::{Error, Result};
use crate::JulianDate;

/// First Julian Day of the Gregorian calendar (1582-10-15).
const JD_GREGORIAN_REFORM: i64 = 2_299_161;

/// `day + 31·(month + 12·year)` of 1582-10-15.
const GREGORIAN_REFORM_KEY: i64 = 15 + 31 * (10 + 12 * 1582);

/// A broken-down civil date and time of day (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarDate {
    /// Midnight of the given day.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0.0,
        }
    }

    /// Same day, with the given time of day.
    pub const fn at(self, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Breaks a Julian Day down into date and time of day.
    pub fn from_julian_day(jd: f64) -> Self {
        let (year, month, day) = date_from_julian_day(jd);
        let (hour, minute, second) = time_from_julian_day(jd);
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day of this date and time.
    pub fn to_julian_day(&self) -> f64 {
        julian_day_from_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Typed variant of [`to_julian_day`](Self::to_julian_day).
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::new(self.to_julian_day())
    }

    /// Decimal year, e.g. `2000.0027` for 2000-01-01.
    pub fn year_fraction(&self) -> f64 {
        year_fraction(self.year, self.month, f64::from(self.day))
    }

    /// Formats as `YYYY-MM-DDThh:mm:ss` (a leading `-` for negative years).
    pub fn to_iso8601(&self) -> String {
        let sign = if self.year < 0 { "-" } else { "" };
        format!(
            "{}{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            sign,
            self.year.unsigned_abs(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DDThh:mm:ss[.fff]`.
    pub fn parse_iso8601(input: &str) -> Result<Self> {
        let text = input.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (date_part, time_part) = match body.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (body, None),
        };

        let mut fields = date_part.split('-');
        let year: i32 = parse_field(input, fields.next(), "missing year")?;
        let month: u32 = parse_field(input, fields.next(), "missing month")?;
        let day: u32 = parse_field(input, fields.next(), "missing day")?;
        if fields.next().is_some() {
            return Err(Error::invalid_date(input, "trailing date fields"));
        }
        let year = if negative { -year } else { year };
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date(input, "month out of range"));
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(Error::invalid_date(input, "day out of range"));
        }

        let mut date = Self::new(year, month, day);
        if let Some(time) = time_part {
            let (hour, minute, second) = parse_time(input, time)?;
            date = date.at(hour, minute, second);
        }
        Ok(date)
    }
}

/// Parses a `hh:mm[:ss]` time of day into a fraction of a day.
pub fn parse_time_of_day(input: &str) -> Result<f64> {
    let (h, m, s) = parse_time(input, input.trim())?;
    Ok((f64::from(h) + (f64::from(m) + s / 60.0) / 60.0) / 24.0)
}

fn parse_time(input: &str, time: &str) -> Result<(u32, u32, f64)> {
    let time = time.trim_end_matches('Z');
    let mut parts = time.split(':');
    let hour: u32 = parse_field(input, parts.next(), "missing hour")?;
    let minute: u32 = parse_field(input, parts.next(), "missing minute")?;
    let second: f64 = match parts.next() {
        Some(s) => parse_field(input, Some(s), "bad seconds")?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return Err(Error::invalid_date(input, "trailing time fields"));
    }
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(Error::invalid_date(input, "time of day out of range"));
    }
    Ok((hour, minute, second))
}

fn parse_field<T: std::str::FromStr>(
    input: &str,
    field: Option<&str>,
    reason: &'static str,
) -> Result<T> {
    field
        .filter(|f| !f.is_empty())
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| Error::invalid_date(input, reason))
}

// ── Integer calendar algorithms ───────────────────────────────────────────

/// Year, month and day of the civil date containing `jd`.
pub fn date_from_julian_day(jd: f64) -> (i32, u32, u32) {
    let julian = (jd + 0.5).floor() as i64;

    let ta = if julian >= JD_GREGORIAN_REFORM {
        let jalpha = (4 * (julian - 1_867_216) - 1) / 146_097;
        julian + 1 + jalpha - jalpha / 4
    } else if julian < 0 {
        julian + 36_525 * (1 - julian / 36_525)
    } else {
        julian
    };

    let tb = ta + 1524;
    let tc = (tb * 20 - 2442) / 7305;
    let td = 365 * tc + tc / 4;
    let te = ((tb - td) * 10_000) / 306_001;

    let day = tb - td - (306_001 * te) / 10_000;
    let mut month = te - 1;
    if month > 12 {
        month -= 12;
    }
    let mut year = tc - 4715;
    if month > 2 {
        year -= 1;
    }
    if julian < 0 {
        year -= 100 * (1 - julian / 36_525);
    }
    (year as i32, month as u32, day as u32)
}

/// Hour, minute and second of the day containing `jd`.
pub fn time_from_julian_day(jd: f64) -> (u32, u32, f64) {
    let frac = jd - jd.floor();
    // 0.1 ms of slack absorbs truncation when jd is an exact minute.
    let secs = frac * 86_400.0 + 1e-4;
    let whole = secs.floor() as i64;
    let hour = ((whole / 3600 + 12) % 24) as u32;
    let minute = ((whole / 60) % 60) as u32;
    let second = (whole % 60) as f64 + (secs - secs.floor() - 1e-4).max(0.0);
    (hour, minute, second)
}

/// Julian Day of a civil date and time (UT).
pub fn julian_day_from_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);

    let (jy, jm) = if m > 2 { (y, m + 1) } else { (y - 1, m + 13) };

    let mut laa = 1461 * jy / 4;
    if jy < 0 && jy % 4 != 0 {
        laa -= 1;
    }
    let lbb = 306_001 * jm / 10_000;
    let mut julian = laa + lbb + d + 1_720_995;

    if d + 31 * (m + 12 * y) >= GREGORIAN_REFORM_KEY {
        let mut lcc = jy / 100;
        if jy < 0 && jy % 100 != 0 {
            lcc -= 1;
        }
        let mut lee = lcc / 4;
        if lcc < 0 && lcc % 4 != 0 {
            lee -= 1;
        }
        julian += 2 - lcc + lee;
    }

    let day_fraction =
        f64::from(hour) / 24.0 + f64::from(minute) / 1440.0 + second / 86_400.0 - 0.5;
    julian as f64 + day_fraction
}

/// Leap-year rule observing the 1582 switch from Julian to Gregorian.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        if year % 100 == 0 {
            year % 400 == 0
        } else {
            year % 4 == 0
        }
    } else {
        // year 0 (1 BCE) is a leap year in astronomical numbering
        year.rem_euclid(4) == 0
    }
}

/// Number of days of `month` in `year`.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day number within the year (Meeus, *Astronomical Algorithms*, ch. 7).
pub fn day_in_year(year: i32, month: u32, day: u32) -> i32 {
    let k = if is_leap_year(year) { 1 } else { 2 };
    let m = month as i32;
    275 * m / 9 - k * ((m + 9) / 12) + day as i32 - 30
}

/// Fractional year `YYYY.ddd`; note that -500.5 lies within year -501.
pub fn year_fraction(year: i32, month: u32, day: f64) -> f64 {
    let d = f64::from(day_in_year(year, month, 0)) + day;
    let days_in_year = if is_leap_year(year) { 366.0 } else { 365.0 };
    f64::from(year) + d / days_in_year
}

/// Decimal year of the civil date containing `jd`.
pub fn year_fraction_of(jd: f64) -> f64 {
    let (year, month, day) = date_from_julian_day(jd);
    year_fraction(year, month, f64::from(day))
}

/// Rata Die day number of a proleptic Gregorian date (Reingold & Dershowitz).
pub fn fixed_from_gregorian(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - 1;
    let m = i64::from(month);
    let mut r = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + (367 * m - 362) / 12
        + i64::from(day);
    if m > 2 {
        r += if is_leap_year(year) { -1 } else { -2 };
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_roundtrip() {
        let jd = julian_day_from_date(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(jd, 2_451_545.0);
        assert_eq!(date_from_julian_day(jd), (2000, 1, 1));
        let (h, m, s) = time_from_julian_day(jd);
        assert_eq!((h, m), (12, 0));
        assert!(s.abs() < 1e-3);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian).
        let before = julian_day_from_date(1582, 10, 4, 12, 0, 0.0);
        let after = julian_day_from_date(1582, 10, 15, 12, 0, 0.0);
        assert_eq!(after - before, 1.0);
        assert_eq!(date_from_julian_day(after), (1582, 10, 15));
        assert_eq!(date_from_julian_day(before), (1582, 10, 4));
    }

    #[test]
    fn ancient_and_negative_dates_roundtrip() {
        for &(y, m, d) in &[(-4712, 1, 1), (-1000, 3, 15), (0, 2, 29), (1, 1, 1), (333, 1, 27)] {
            let jd = julian_day_from_date(y, m, d, 12, 0, 0.0);
            assert_eq!(date_from_julian_day(jd), (y, m, d), "jd = {jd}");
        }
        // JD 0 is noon of -4712-01-01 (Julian).
        assert_eq!(julian_day_from_date(-4712, 1, 1, 12, 0, 0.0), 0.0);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1500));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
    }

    #[test]
    fn day_in_year_and_fraction() {
        assert_eq!(day_in_year(1978, 11, 14), 318);
        assert_eq!(day_in_year(1988, 4, 22), 113);
        assert!((year_fraction(2000, 1, 1.0) - (2000.0 + 1.0 / 366.0)).abs() < 1e-12);
        assert!((year_fraction_of(2_451_544.5) - (2000.0 + 1.0 / 366.0)).abs() < 1e-12);
    }

    #[test]
    fn fixed_day_numbers() {
        assert_eq!(fixed_from_gregorian(1, 1, 1), 1);
        assert_eq!(fixed_from_gregorian(1945, 11, 12), 710_347);
    }

    #[test]
    fn iso_parse_and_format() {
        let d = CalendarDate::parse_iso8601("2024-03-20T03:06:30").expect("valid");
        assert_eq!((d.year, d.month, d.day, d.hour, d.minute), (2024, 3, 20, 3, 6));
        assert!((d.second - 30.0).abs() < 1e-12);
        assert_eq!(d.to_iso8601(), "2024-03-20T03:06:30");

        let neg = CalendarDate::parse_iso8601("-0500-01-01").expect("valid");
        assert_eq!(neg.year, -500);
        assert_eq!(neg.to_iso8601(), "-0500-01-01T00:00:00");
    }

    #[test]
    fn iso_parse_rejects_garbage() {
        assert!(CalendarDate::parse_iso8601("not a date").is_err());
        assert!(CalendarDate::parse_iso8601("2023-02-29").is_err());
        assert!(CalendarDate::parse_iso8601("2024-13-01").is_err());
        assert!(CalendarDate::parse_iso8601("2024-01-01T25:00").is_err());
    }

    #[test]
    fn time_of_day_fraction() {
        assert!((parse_time_of_day("12:00").expect("valid") - 0.5).abs() < 1e-12);
        assert!((parse_time_of_day("22:00").expect("valid") - 22.0 / 24.0).abs() < 1e-12);
        assert!(parse_time_of_day("noon").is_err());
    }

    #[test]
    fn calendar_date_jd_roundtrip() {
        let date = CalendarDate::new(1987, 4, 10).at(19, 21, 0.0);
        let jd = date.to_julian_day();
        assert!((jd - 2_446_896.306_25).abs() < 1e-9);
        let back = CalendarDate::from_julian_day(jd);
        assert_eq!((back.year, back.month, back.day, back.hour, back.minute), (1987, 4, 10, 19, 21));
    }
}
