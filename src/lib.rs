//! Milestone task date generation for recurring dreams.
//!
//! A dream runs from a start date for a duration in days, weeks, months or
//! years. [`generate_task_dates`] lays milestone tasks over that span on a
//! daily, weekly, semi-weekly, monthly or semi-monthly cadence.

pub mod cli;
pub mod error;
pub mod plan;
pub mod render;
pub mod schedule;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use plan::{build_plan, plan_dream, DreamRequest};
pub use schedule::{end_date, generate_task_dates, generate_task_dates_lenient, MAX_TASKS};
pub use types::{DreamPlan, DurationUnit, PlannedTask, Recurrence, TaskDate};
pub use validate::{validate_dream, ValidationResult};
