//! Error types for dream-schedule
//!
//! Exit codes:
//! - 0: Success
//! - 1: I/O or serialization failure
//! - 2: User error (bad arguments, invalid request body)

use thiserror::Error;

pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const USER_ERROR: i32 = 2;
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date '{0}': use YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),

    #[error("Invalid duration '{0}': use an integer with optional d/w/m/y suffix")]
    InvalidDuration(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidTimezone(_)
            | Error::InvalidDate(_)
            | Error::InvalidDuration(_)
            | Error::Validation(_) => exit_codes::USER_ERROR,
            Error::Io(_) | Error::Json(_) => exit_codes::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
