//! Time collaborators and calendar math
//!
//! Two narrow traits keep the platform out of the core: `Monotonic` feeds
//! the heartbeat, `WallClock` backs the date/time menu entries. The
//! civil/Unix conversion is the standard era-based algorithm, done in
//! integers so it works in `no_std`.

use core::fmt;

/// Monotonic millisecond tick source (never goes backwards).
pub trait Monotonic {
    fn now_ms(&self) -> u64;
}

/// Settable wall clock, seconds since the Unix epoch.
pub trait WallClock {
    fn now_unix(&self) -> i64;
    fn set_unix(&mut self, secs: i64);
}

const SECS_PER_DAY: i64 = 86_400;

static MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

static DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// Broken-down civil time. Fields are taken at face value; out-of-range
/// values produce a wrong but well-defined timestamp, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateTime {
    /// Seconds since 1970-01-01 00:00:00 UTC.
    pub fn to_unix(&self) -> i64 {
        let days = days_from_civil(self.year as i64, self.month as i64, self.day as i64);
        days * SECS_PER_DAY
            + self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// Break a Unix timestamp back into civil fields.
    pub fn from_unix(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour: (rem / 3600) as u32,
            minute: (rem / 60 % 60) as u32,
            second: (rem % 60) as u32,
        }
    }

    /// Weekday name, derived from the day count (1970-01-01 was a Thursday).
    pub fn weekday(&self) -> &'static str {
        let days = days_from_civil(self.year as i64, self.month as i64, self.day as i64);
        DAY_NAMES[(days + 4).rem_euclid(7) as usize]
    }

    fn month_name(&self) -> &'static str {
        match self.month {
            1..=12 => MONTH_NAMES[self.month as usize - 1],
            _ => "?",
        }
    }
}

/// `October 24 2024 12:30:00 (Thursday)`
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02} {} {:02}:{:02}:{:02} ({})",
            self.month_name(),
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
            self.weekday()
        )
    }
}

// Days between 1970-01-01 and y-m-d, proleptic Gregorian.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}
