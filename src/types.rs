use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned by the strict `FromStr` impls below
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// One generated milestone date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskDate {
    pub date: NaiveDate,
    pub order: u32,
}

/// Unit of a dream's total duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 4] = [
        DurationUnit::Days,
        DurationUnit::Weeks,
        DurationUnit::Months,
        DurationUnit::Years,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }

    /// Map a single-letter shorthand ("d", "w", "m", "y")
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            'd' => Some(DurationUnit::Days),
            'w' => Some(DurationUnit::Weeks),
            'm' => Some(DurationUnit::Months),
            'y' => Some(DurationUnit::Years),
            _ => None,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "duration unit",
                value: s.to_string(),
                expected: "days, weeks, months, years",
            })
    }
}

/// Cadence of milestone tasks inside the dream span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    Daily,
    Weekly,
    SemiWeekly,
    Monthly,
    SemiMonthly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 5] = [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::SemiWeekly,
        Recurrence::Monthly,
        Recurrence::SemiMonthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::SemiWeekly => "semi-weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::SemiMonthly => "semi-monthly",
        }
    }

    /// Parse a recurrence name, treating anything unrecognized as daily
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(recurrence = s, "unrecognized recurrence, falling back to daily");
            Recurrence::Daily
        })
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Recurrence::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "recurrence",
                value: s.to_string(),
                expected: "daily, weekly, semi-weekly, monthly, semi-monthly",
            })
    }
}

/// Task ready to be persisted by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub title: String,
    pub date: NaiveDate,
    pub order: u32,
}

/// Full schedule for one dream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamPlan {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub duration_unit: DurationUnit,
    pub recurrence: Recurrence,
    pub tasks: Vec<PlannedTask>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_wire_names() {
        let json = serde_json::to_string(&Recurrence::SemiMonthly).unwrap();
        assert_eq!(json, "\"semi-monthly\"");
        let parsed: Recurrence = serde_json::from_str("\"semi-weekly\"").unwrap();
        assert_eq!(parsed, Recurrence::SemiWeekly);
    }

    #[test]
    fn test_recurrence_lossy_falls_back_to_daily() {
        assert_eq!(Recurrence::from_str_lossy("fortnightly"), Recurrence::Daily);
        assert_eq!(Recurrence::from_str_lossy("monthly"), Recurrence::Monthly);
    }

    #[test]
    fn test_duration_unit_strict_parse() {
        assert_eq!("weeks".parse::<DurationUnit>(), Ok(DurationUnit::Weeks));
        let err = "decades".parse::<DurationUnit>().unwrap_err();
        assert_eq!(err.value, "decades");
        assert!(err.to_string().contains("days, weeks, months, years"));
    }

    #[test]
    fn test_duration_unit_suffix() {
        assert_eq!(DurationUnit::from_suffix('m'), Some(DurationUnit::Months));
        assert_eq!(DurationUnit::from_suffix('h'), None);
    }
}
