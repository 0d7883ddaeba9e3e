//! Milestone date generation for a dream span.
//!
//! `generate_task_dates` is total: any input yields a (possibly empty)
//! ordered sequence, never a panic or an error.

pub mod calendar;
pub mod recurrence;
pub mod span;

use chrono::NaiveDate;

use crate::types::{DurationUnit, Recurrence, TaskDate};

pub use calendar::{
    add_days, add_months, add_years, last_day_of_month, normalize_to_local_midnight,
    parse_calendar_day, today_in,
};
pub use recurrence::MAX_TASKS;
pub use span::end_date;

/// Generate task dates for a dream starting on `start`
///
/// # Arguments
/// * `start` - Calendar day the dream starts (already local midnight)
/// * `duration` - Number of `unit`s; zero or negative yields no tasks
/// * `unit` - Unit of `duration`
/// * `recurrence` - Cadence of the tasks
///
/// # Returns
/// Dates strictly after `start` up to the inclusive end date, with dense
/// zero-based `order`, at most `MAX_TASKS` entries
pub fn generate_task_dates(
    start: NaiveDate,
    duration: i64,
    unit: DurationUnit,
    recurrence: Recurrence,
) -> Vec<TaskDate> {
    if duration <= 0 {
        return Vec::new();
    }

    let end = end_date(start, duration, unit);
    let tasks = recurrence.plan(start, end);
    tracing::debug!(
        %start,
        %end,
        duration,
        unit = unit.as_str(),
        recurrence = recurrence.as_str(),
        count = tasks.len(),
        "generated task dates"
    );
    tasks
}

/// Same as `generate_task_dates`, but accepts the recurrence by name
///
/// Unrecognized names fall back to daily.
pub fn generate_task_dates_lenient(
    start: NaiveDate,
    duration: i64,
    unit: DurationUnit,
    recurrence: &str,
) -> Vec<TaskDate> {
    generate_task_dates(start, duration, unit, Recurrence::from_str_lossy(recurrence))
}
