//! Datetime parsing without timezone databases.
//!
//! `DateTime` keeps the civil fields plus a fixed UTC offset, which is all
//! that post front matter and the scheduling check need.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTime::parse("2024-06-15").unwrap();
//! let dt = DateTime::parse("2024-06-15T14:30:45+03:00").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45+03:00");
//! let ms = dt.unix_millis();
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Civil datetime with a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millis: u16,
    /// Offset from UTC in minutes (`+03:00` is 180).
    pub offset_minutes: i16,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millis: 0,
            offset_minutes: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub const fn with_offset(mut self, offset_minutes: i16) -> Self {
        self.offset_minutes = offset_minutes;
        self
    }

    /// Current time in UTC.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self::from_unix_millis(ms)
    }

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS[.fff]][Z|±HH:MM]`.
    ///
    /// A space may replace the `T`. Without an offset the time is UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        let mut dt = Self::from_ymd(year, month, day);
        let rest = &bytes[10..];
        if rest.is_empty() {
            dt.validate().ok()?;
            return Some(dt);
        }

        if !matches!(rest[0], b'T' | b't' | b' ') || rest.len() < 6 || rest[3] != b':' {
            return None;
        }
        dt.hour = parse_u8(&rest[1..3])?;
        dt.minute = parse_u8(&rest[4..6])?;
        let mut rest = &rest[6..];

        if let [b':', a, b, tail @ ..] = rest {
            dt.second = parse_u8(&[*a, *b])?;
            rest = tail;
        }

        if let [b'.', tail @ ..] = rest {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            // keep millisecond precision, drop the rest
            let mut millis = 0u16;
            for i in 0..3 {
                let d = tail.get(i).filter(|_| i < digits).map_or(0, |b| b - b'0');
                millis = millis * 10 + u16::from(d);
            }
            dt.millis = millis;
            rest = &tail[digits..];
        }

        dt.offset_minutes = match rest {
            [] | [b'Z' | b'z'] => 0,
            [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
                let hours = i16::from(parse_u8(&[*h1, *h2])?);
                let minutes = i16::from(parse_u8(&[*m1, *m2])?);
                if hours > 23 || minutes > 59 {
                    return None;
                }
                let total = hours * 60 + minutes;
                if *sign == b'-' { -total } else { total }
            }
            _ => return None,
        };

        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millis,
            ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }
        if millis > 999 {
            bail!("millisecond is invalid: {millis}");
        }

        Ok(())
    }

    #[inline]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Milliseconds since the unix epoch, offset applied.
    pub fn unix_millis(&self) -> i64 {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        days * MS_PER_DAY
            + i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millis)
            - i64::from(self.offset_minutes) * MS_PER_MINUTE
    }

    /// UTC datetime for a unix timestamp in milliseconds.
    pub fn from_unix_millis(ms: i64) -> Self {
        let days = ms.div_euclid(MS_PER_DAY);
        let rem = ms.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hour: (rem / MS_PER_HOUR) as u8,
            minute: (rem % MS_PER_HOUR / MS_PER_MINUTE) as u8,
            second: (rem % MS_PER_MINUTE / MS_PER_SECOND) as u8,
            millis: (rem % MS_PER_SECOND) as u16,
            offset_minutes: 0,
        }
    }

    /// Format as RFC 3339: `YYYY-MM-DDTHH:MM:SSZ` or with `±HH:MM`.
    pub fn to_rfc3339(self) -> String {
        let offset = if self.offset_minutes == 0 {
            "Z".to_string()
        } else {
            let sign = if self.offset_minutes < 0 { '-' } else { '+' };
            let abs = self.offset_minutes.unsigned_abs();
            format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
        };
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{offset}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of `days_from_civil`.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTime::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTime::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = DateTime::parse("2024-06-15T14:30:45+03:00").unwrap();
        assert_eq!((dt.hour, dt.minute, dt.second), (14, 30, 45));
        assert_eq!(dt.offset_minutes, 180);

        let utc = DateTime::parse("2024-06-15T11:30:45Z").unwrap();
        assert_eq!(dt.unix_millis(), utc.unix_millis());
    }

    #[test]
    fn test_parse_fraction_and_short_forms() {
        let dt = DateTime::parse("2024-06-15T14:30:45.1234Z").unwrap();
        assert_eq!(dt.millis, 123);

        let dt = DateTime::parse("2024-06-15 14:30").unwrap();
        assert_eq!((dt.hour, dt.minute, dt.second), (14, 30, 0));

        let dt = DateTime::parse("2024-06-15T14:30:00-05:30").unwrap();
        assert_eq!(dt.offset_minutes, -330);
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "",
            "2024-6-15",
            "2024/06/15",
            "2024-02-30",
            "2024-06-15T24:00:00Z",
            "2024-06-15T14:30:45+3:00",
            "2024-06-15T14:30:45.Z",
            "2024-06-15T14:30:45 junk",
        ] {
            assert!(DateTime::parse(input).is_none(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_unix_millis_epoch() {
        assert_eq!(DateTime::from_ymd(1970, 1, 1).unix_millis(), 0);
        assert_eq!(DateTime::from_ymd(1970, 1, 2).unix_millis(), MS_PER_DAY);
        // 2000-03-01 crosses a leap day in a century year divisible by 400
        assert_eq!(DateTime::from_ymd(2000, 3, 1).unix_millis(), 951_868_800_000);
    }

    #[test]
    fn test_unix_millis_inverse() {
        let dt = DateTime::parse("2024-02-29T23:59:59.500Z").unwrap();
        assert_eq!(DateTime::from_unix_millis(dt.unix_millis()), dt);

        let before_epoch = DateTime::from_unix_millis(-1);
        assert_eq!(before_epoch.year, 1969);
        assert_eq!((before_epoch.month, before_epoch.day), (12, 31));
        assert_eq!(before_epoch.millis, 999);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTime::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTime::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTime::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTime::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_to_rfc3339() {
        assert_eq!(
            DateTime::new(2024, 6, 15, 14, 30, 45).to_rfc3339(),
            "2024-06-15T14:30:45Z"
        );
        assert_eq!(
            DateTime::new(2024, 6, 15, 14, 30, 45)
                .with_offset(-90)
                .to_rfc3339(),
            "2024-06-15T14:30:45-01:30"
        );
    }
}
