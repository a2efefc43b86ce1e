//! Date, time, and duration display utilities.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a duration of work as hours and minutes, e.g. `2h 05m`.
///
/// Seconds are truncated. Negative durations cannot come out of the
/// transition logic and are shown as zero.
///
/// ```rust
/// use jiff::SignedDuration;
/// use shiftboard_core::display::WorkedTime;
///
/// assert_eq!(WorkedTime(SignedDuration::from_mins(125)).to_string(), "2h 05m");
/// assert_eq!(WorkedTime(SignedDuration::from_secs(59)).to_string(), "0h 00m");
/// ```
pub struct WorkedTime(pub SignedDuration);

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0.as_secs().max(0) / 60;
        write!(f, "{}h {:02}m", minutes / 60, minutes % 60)
    }
}
