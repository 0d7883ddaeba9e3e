use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};

/// Calendar day of `instant` in its own zone, time of day dropped
pub fn normalize_to_local_midnight<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Current calendar day in `tz`
pub fn today_in<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    normalize_to_local_midnight(&Utc::now().with_timezone(tz))
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar day in `tz`
pub fn parse_calendar_day<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| normalize_to_local_midnight(&instant.with_timezone(tz)))
}

/// Add `days` calendar days (may be negative)
///
/// Saturates at `NaiveDate::MIN` / `NaiveDate::MAX` instead of panicking.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or_else(|| saturated(days))
}

/// Add `months` months, clamping the day to the end of the target month
///
/// Jan 31 + 1 month is Feb 28 (Feb 29 in a leap year), never Mar 3.
pub fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let current = i64::from(date.year()) * 12 + i64::from(date.month0());
    let Some(target) = current.checked_add(months) else {
        return saturated(months);
    };

    let Ok(year) = i32::try_from(target.div_euclid(12)) else {
        return saturated(months);
    };
    let month = target.rem_euclid(12) as u32 + 1;

    let day = date.day().min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| saturated(months))
}

/// Add `years` years; Feb 29 lands on Feb 28 in a non-leap target year
pub fn add_years(date: NaiveDate, years: i64) -> NaiveDate {
    match years.checked_mul(12) {
        Some(months) => add_months(date, months),
        None => saturated(years),
    }
}

/// Number of days in `month` (1-based) of `year`
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

fn saturated(direction: i64) -> NaiveDate {
    if direction < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    }
}
