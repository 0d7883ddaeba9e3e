use chrono::{Datelike, NaiveDate};

use super::calendar::{add_days, add_months};
use crate::types::{Recurrence, TaskDate};

/// Upper bound on tasks generated for a single dream
pub const MAX_TASKS: u32 = 1000;

impl Recurrence {
    /// Task dates for this cadence strictly after `start`, up to and including `end`
    pub fn plan(self, start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
        match self {
            Recurrence::Daily => plan_daily(start, end),
            Recurrence::Weekly => plan_weekly(start, end),
            Recurrence::SemiWeekly => plan_semi_weekly(start, end),
            Recurrence::Monthly => plan_monthly(start, end),
            Recurrence::SemiMonthly => plan_semi_monthly(start, end),
        }
    }
}

/// One task per day, starting the day after `start`
pub fn plan_daily(start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
    collect(start, end, |previous, _| add_days(previous, 1))
}

/// One task every seven days, starting a week after `start`
pub fn plan_weekly(start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
    collect(start, end, |previous, _| add_days(previous, 7))
}

/// Two tasks a week: first after 3 days, then gaps of 4, 3, 4, 3, ...
pub fn plan_semi_weekly(start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
    collect(start, end, |previous, order| {
        let gap = if order % 2 == 1 { 4 } else { 3 };
        add_days(previous, gap)
    })
}

/// One task per month, each clamped independently from `start`
pub fn plan_monthly(start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
    collect(start, end, |_, order| add_months(start, i64::from(order) + 1))
}

/// Tasks on the 1st and 16th of every month, alternating
pub fn plan_semi_monthly(start: NaiveDate, end: NaiveDate) -> Vec<TaskDate> {
    collect(start, end, |previous, _| next_semi_monthly(previous))
}

/// Next 1st or 16th strictly after `date`
fn next_semi_monthly(date: NaiveDate) -> NaiveDate {
    if date.day() < 16 {
        date.with_day(16).unwrap_or(date)
    } else {
        add_months(date.with_day(1).unwrap_or(date), 1)
    }
}

/// Drive a cadence until it passes `end` or hits `MAX_TASKS`
///
/// `next` receives the previous date (`start` for the first call) and the
/// order of the task being produced. A candidate that does not move strictly
/// forward ends the sequence, so saturated calendar arithmetic cannot loop.
fn collect<F>(start: NaiveDate, end: NaiveDate, mut next: F) -> Vec<TaskDate>
where
    F: FnMut(NaiveDate, u32) -> NaiveDate,
{
    let mut tasks = Vec::new();
    let mut previous = start;

    for order in 0..MAX_TASKS {
        let candidate = next(previous, order);
        if candidate > end || candidate <= previous {
            return tasks;
        }
        tasks.push(TaskDate {
            date: candidate,
            order,
        });
        previous = candidate;
    }

    tracing::debug!(cap = MAX_TASKS, %start, %end, "task cap reached");
    tasks
}
