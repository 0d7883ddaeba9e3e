use chrono::NaiveDate;

use super::calendar::{add_days, add_months, add_years};
use crate::types::DurationUnit;

/// Inclusive last day of a span of `duration` units starting on `start`
///
/// A 7-day span starting on day X ends on day X+6. Only meaningful for
/// `duration > 0`; the generator never asks for anything else.
pub fn end_date(start: NaiveDate, duration: i64, unit: DurationUnit) -> NaiveDate {
    match unit {
        DurationUnit::Days => add_days(start, duration.saturating_sub(1)),
        DurationUnit::Weeks => add_days(start, duration.saturating_mul(7).saturating_sub(1)),
        DurationUnit::Months => add_days(add_months(start, duration), -1),
        DurationUnit::Years => add_days(add_years(start, duration), -1),
    }
}
