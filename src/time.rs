//! Calendar conversion for cookie `expires` dates.
use std::time::SystemTime;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT_DAYS: i64 = 719_468;
/// The Gregorian calendar repeats every 400 years.
const DAYS_PER_ERA: i64 = 146_097;

/// Converts days since 1970-01-01 to `(year, month, day)`.
///
/// Counts years from March so the leap day falls at the end of the year.
/// Takes constant time, even for the extreme `i64` expiry times.
#[must_use]
pub fn civil_from_days(epoch_days: i64) -> (i64, i64, i64) {
    let z = epoch_days + EPOCH_SHIFT_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z.rem_euclid(DAYS_PER_ERA);
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524
        - day_of_era / (DAYS_PER_ERA - 1))
        / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    // Month starting from March = 0.
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// A UTC date and time.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub min: i64,
    pub sec: i64,
    /// Days since Sunday, `0..7`.
    pub weekday: i64,
}
impl DateTime {
    // Epoch time assumes that every day is the same length, 24 * 60 * 60 seconds.
    // It ignores leap seconds.
    #[must_use]
    pub fn new(epoch_seconds: i64) -> Self {
        let epoch_days = epoch_seconds.div_euclid(SECONDS_PER_DAY);
        let day_seconds = epoch_seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(epoch_days);
        Self {
            year,
            month,
            day,
            hour: day_seconds / 3600,
            min: (day_seconds % 3600) / 60,
            sec: day_seconds % 60,
            // 1970-01-01 was a Thursday.
            weekday: (epoch_days + 4).rem_euclid(7),
        }
    }

    /// Formats as an RFC 7231 IMF-fixdate, like `Sat, 20 Nov 2286 17:46:39 GMT`.
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn imf_fixdate(&self) -> String {
        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            DAY_NAMES[self.weekday as usize],
            self.day,
            MONTH_NAMES[(self.month - 1) as usize],
            self.year,
            self.hour,
            self.min,
            self.sec
        )
    }
}

/// Seconds since the Unix epoch, negative for times before it.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn epoch_seconds(t: SystemTime) -> i64 {
    match t.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

#[must_use]
pub fn now_epoch_seconds() -> i64 {
    epoch_seconds(SystemTime::now())
}

#[allow(clippy::module_name_repetitions)]
pub trait FormatTime {
    fn imf_fixdate(&self) -> String;
}
impl FormatTime for i64 {
    fn imf_fixdate(&self) -> String {
        DateTime::new(*self).imf_fixdate()
    }
}
impl FormatTime for SystemTime {
    fn imf_fixdate(&self) -> String {
        DateTime::new(epoch_seconds(*self)).imf_fixdate()
    }
}
