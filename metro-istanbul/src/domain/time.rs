//! Timestamp and time-of-day handling.
//!
//! The timetable endpoint accepts its request timestamp in exactly one text
//! shape, `YYYY-MM-DDTHH:mm:ss.fffffff±HH:MM`, where the seven fractional
//! digits are the millisecond component followed by four literal zeros.
//! Everything else the API returns as a time is a bare "HH:MM" (or
//! "HH:MM:SS") time of day with no date attached.

use chrono::{DateTime, Datelike, Local, NaiveTime, Offset, TimeZone, Timelike};

/// Format an instant in the extended local ISO form expected by `GetTimeTable`.
///
/// The date and time fields are taken in the instant's own time zone, and the
/// suffix is that zone's UTC offset.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Timelike};
/// use metro_istanbul::domain::format_extended_iso;
///
/// let istanbul = FixedOffset::east_opt(3 * 3600).unwrap();
/// let at = istanbul
///     .with_ymd_and_hms(2024, 1, 5, 9, 3, 7)
///     .unwrap()
///     .with_nanosecond(250_000_000)
///     .unwrap();
///
/// assert_eq!(format_extended_iso(&at), "2024-01-05T09:03:07.2500000+03:00");
/// ```
pub fn format_extended_iso<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let offset_minutes = at.offset().fix().local_minus_utc() / 60;
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let offset_minutes = offset_minutes.abs();

    // Leap seconds carry nanoseconds past 1e9; keep them in the last millisecond.
    let millis = (at.nanosecond() / 1_000_000).min(999);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}0000{}{:02}:{:02}",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
        millis,
        sign,
        offset_minutes / 60,
        offset_minutes % 60,
    )
}

/// Format the current local time with [`format_extended_iso`].
pub fn now_extended_iso() -> String {
    format_extended_iso(&Local::now())
}

/// Parse a time of day as sent by the API ("06:15" or "06:15:00").
///
/// Returns `None` for anything else; the raw string is always kept alongside,
/// so callers never lose data when this fails.
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}
