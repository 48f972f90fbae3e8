//! Date and time conversions for property values.
//!
//! Two distinct clocks appear in property sets: the OLE Automation date (a
//! floating-point day count from 1899-12-30, fractional part carrying the
//! time of day) and the Windows FILETIME (100-nanosecond ticks since
//! 1601-01-01 UTC).

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// 100-nanosecond intervals between 1601-01-01 and the Unix epoch.
const FILETIME_UNIX_OFFSET: i128 = 116_444_736_000_000_000;

/// Convert an OLE Automation date to a calendar timestamp.
///
/// The raw double splits into a whole day count `D = floor(raw)` and a
/// fractional day `F = raw - D`; the result is the 1899-12-30 epoch plus
/// `D` days plus `round(F * 86400)` seconds. A negative day or fractional
/// part fails with [`Error::InvalidDate`], as do non-finite inputs and day
/// counts past the calendar range.
///
/// # Examples
///
/// ```
/// use oleps::time::automation_date_to_datetime;
///
/// let epoch = automation_date_to_datetime(0.0).unwrap();
/// assert_eq!(epoch.to_string(), "1899-12-30 00:00:00");
/// ```
pub fn automation_date_to_datetime(raw: f64) -> Result<NaiveDateTime> {
    if !raw.is_finite() {
        return Err(Error::InvalidDate { raw });
    }

    let days = raw.floor();
    let fraction = raw - days;
    if days < 0.0 || fraction < 0.0 {
        return Err(Error::InvalidDate { raw });
    }

    let seconds = (fraction * 86_400.0).round() as i64;
    Duration::try_days(days as i64)
        .and_then(|delta| automation_epoch().checked_add_signed(delta))
        .and_then(|date| date.checked_add_signed(Duration::seconds(seconds)))
        .ok_or(Error::InvalidDate { raw })
}

/// Convert a Windows FILETIME tick count to a UTC timestamp.
pub fn filetime_to_datetime(ticks: u64) -> DateTime<Utc> {
    let unix_100ns = ticks as i128 - FILETIME_UNIX_OFFSET;
    let secs = unix_100ns.div_euclid(10_000_000) as i64;
    let nanos = (unix_100ns.rem_euclid(10_000_000) * 100) as u32;
    // Every u64 tick count lands within chrono's representable range: the
    // maximum is roughly the year 60000, far below chrono's +/-262000.
    DateTime::from_timestamp(secs, nanos).expect("FILETIME within datetime range")
}

fn automation_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("automation epoch is a valid timestamp")
}
