// Packing date decoding: YYMMDD digits -> start of that day in a time zone

use crate::digits::date_chunks;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Century prepended to the two-digit year
const CENTURY: i32 = 2000;

/// Decode a YYMMDD field into the instant the day starts in `tz`
///
/// Returns None when the field is not six digits or does not name a real
/// calendar day (month 00 or 13, day 00, Feb 30, ...).
pub fn decode_date(digits: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let (yy, mm, dd) = date_chunks(digits)?;

    let Some(day) = NaiveDate::from_ymd_opt(CENTURY + yy as i32, mm, dd) else {
        tracing::warn!("Ignoring invalid packing date {:?}", digits);
        return None;
    };

    start_of_day(day, tz)
}

/// First instant of a calendar day in `tz`
/// Midnight can fall into a DST gap, in which case the day starts at the first valid hour
pub fn start_of_day(day: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    (0..24)
        .filter_map(|hour| day.and_hms_opt(hour, 0, 0))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}
