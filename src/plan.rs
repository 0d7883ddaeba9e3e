//! Turn a dream creation body into a persistable schedule.
//!
//! This is the caller side of the generator: validate the body, generate the
//! dates, and attach a title to every task.

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schedule::{end_date, generate_task_dates, parse_calendar_day};
use crate::types::{DreamPlan, DurationUnit, PlannedTask, Recurrence};
use crate::validate::{validate_dream, whole_number};

/// Dream creation body as sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "whole_duration")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub duration_unit: Option<DurationUnit>,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub task_titles: Option<Vec<Option<String>>>,
}

/// Validate `body` and build the dream's schedule
///
/// Missing fields default to: start today, unit days, recurrence daily.
/// Without a duration the dream has no tasks.
///
/// # Errors
/// `Error::Validation` carries every violation found in `body`.
pub fn plan_dream<Tz: TimeZone>(body: &Value, tz: &Tz, today: NaiveDate) -> Result<DreamPlan> {
    let validation = validate_dream(body, tz, today);
    if !validation.valid {
        return Err(Error::Validation(validation.errors));
    }

    let request: DreamRequest = serde_json::from_value(body.clone())?;
    let start_date = match request.start_date.as_deref() {
        Some(raw) => {
            parse_calendar_day(raw, tz).ok_or_else(|| Error::InvalidDate(raw.to_string()))?
        }
        None => today,
    };
    Ok(build_plan(request, start_date))
}

/// Build the schedule for an already validated request starting on `start_date`
///
/// `request.start_date` is ignored in favour of the resolved `start_date`.
pub fn build_plan(request: DreamRequest, start_date: NaiveDate) -> DreamPlan {
    let duration_unit = request.duration_unit.unwrap_or(DurationUnit::Days);
    let recurrence = request
        .recurrence
        .as_deref()
        .map(Recurrence::from_str_lossy)
        .unwrap_or(Recurrence::Daily);

    let (end, dates) = match request.duration {
        Some(duration) if duration > 0 => (
            Some(end_date(start_date, duration, duration_unit)),
            generate_task_dates(start_date, duration, duration_unit, recurrence),
        ),
        _ => (None, Vec::new()),
    };

    let titles = request.task_titles.unwrap_or_default();
    let tasks: Vec<PlannedTask> = dates
        .into_iter()
        .map(|task| PlannedTask {
            title: task_title(&titles, task.order),
            date: task.date,
            order: task.order,
        })
        .collect();

    tracing::info!(
        title = %request.title,
        %start_date,
        tasks = tasks.len(),
        "planned dream"
    );

    DreamPlan {
        title: request.title,
        description: request.description,
        start_date,
        end_date: end,
        duration_unit,
        recurrence,
        tasks,
    }
}

/// Accept `3` and `3.0` alike; any other number is treated as absent
fn whole_duration<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.as_ref().and_then(whole_number))
}

/// Caller-supplied title for the task at `order`, else "Task N"
fn task_title(titles: &[Option<String>], order: u32) -> String {
    titles
        .get(order as usize)
        .and_then(|title| title.as_deref())
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Task {}", order + 1))
}
