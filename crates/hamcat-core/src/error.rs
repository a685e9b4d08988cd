use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a date: {0}")]
    InvalidDate(#[from] DateParseError),
}

/// Why an event date string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected '<day> <month> [year]', got '{0}'")]
    TooFewTokens(String),

    #[error("invalid day '{0}'")]
    InvalidDay(String),

    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("invalid year '{0}' (expected 2 or 4 digits)")]
    InvalidYear(String),

    #[error("date out of range: day {day} of month {month} in {year}")]
    OutOfRange { year: i32, month: u32, day: i64 },
}
