use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::schedule::calendar::parse_calendar_day;
use crate::types::{DurationUnit, Recurrence};

pub const MAX_TITLE_CHARS: usize = 24;
pub const MAX_DESCRIPTION_CHARS: usize = 60;

/// Outcome of validating a dream creation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a dream creation body, collecting every violation
///
/// # Arguments
/// * `body` - Parsed JSON request body
/// * `tz` - Zone used to turn RFC 3339 start timestamps into calendar days
/// * `today` - Current calendar day in `tz`; a start date before it is rejected
pub fn validate_dream<Tz: TimeZone>(body: &Value, tz: &Tz, today: NaiveDate) -> ValidationResult {
    let Some(fields) = body.as_object() else {
        return ValidationResult::from_errors(vec![
            "Request body must be a JSON object".to_string(),
        ]);
    };
    let present = |key: &str| non_null(fields, key);

    let mut errors = Vec::new();

    match present("title") {
        None => errors.push("Title is required".to_string()),
        Some(Value::String(title)) if title.is_empty() => {
            errors.push("Title is required".to_string())
        }
        Some(Value::String(title)) => {
            if title.chars().count() > MAX_TITLE_CHARS {
                errors.push(format!("Title must be {MAX_TITLE_CHARS} characters or less"));
            }
        }
        Some(_) => errors.push("Title must be a string".to_string()),
    }

    match present("description") {
        None => {}
        Some(Value::String(description)) => {
            if description.chars().count() > MAX_DESCRIPTION_CHARS {
                errors.push(format!(
                    "Description must be {MAX_DESCRIPTION_CHARS} characters or less"
                ));
            }
        }
        Some(_) => errors.push("Description must be a string".to_string()),
    }

    if let Some(duration) = present("duration") {
        let whole = match duration {
            Value::Number(n) => whole_number(n),
            _ => None,
        };
        if !whole.is_some_and(|d| d > 0) {
            errors.push("Duration must be a positive integer".to_string());
        }
    }

    if let Some(unit) = present("durationUnit") {
        if let Err(err) = enum_field::<DurationUnit>(unit) {
            errors.push(format!("Duration unit must be one of: {err}"));
        }
    }

    if let Some(recurrence) = present("recurrence") {
        if let Err(err) = enum_field::<Recurrence>(recurrence) {
            errors.push(format!("Recurrence must be one of: {err}"));
        }
    }

    if let Some(titles) = present("taskTitles") {
        let well_formed = titles
            .as_array()
            .is_some_and(|items| items.iter().all(|t| t.is_string() || t.is_null()));
        if !well_formed {
            errors.push("Task titles must be an array of strings".to_string());
        }
    }

    if let Some(start) = present("startDate") {
        match start.as_str().and_then(|raw| parse_calendar_day(raw, tz)) {
            None => errors.push("Start date must be a valid date".to_string()),
            Some(day) if day < today => {
                errors.push("Start date cannot be in the past".to_string())
            }
            Some(_) => {}
        }
    }

    ValidationResult::from_errors(errors)
}

/// Integer value of a JSON number with no fractional part (`3` or `3.0`)
pub(crate) fn whole_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

/// A field counts as absent when missing or null
fn non_null<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Strictly parse a string-valued enum field, yielding the accepted names on failure
fn enum_field<T>(value: &Value) -> Result<T, &'static str>
where
    T: std::str::FromStr<Err = crate::types::ParseEnumError>,
{
    let raw = value.as_str().unwrap_or_default();
    raw.parse::<T>().map_err(|err| err.expected)
}
