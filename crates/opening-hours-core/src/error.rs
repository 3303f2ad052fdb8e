//! Error types for loading opening_hours rules.

use thiserror::Error;

/// Errors that can occur while loading rules or looking up calendar names.
///
/// Grouping and rendering never fail; only the edges that turn external
/// input into [`Rule`](crate::rule::Rule) values produce these.
#[derive(Error, Debug)]
pub enum OpeningHoursError {
    /// The input string was not a valid JSON rule list.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A month name that is not one of `Jan`..`Dec`.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// A weekday abbreviation that matches neither English nor German names.
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),
}

/// Convenience alias used throughout opening-hours-core.
pub type Result<T> = std::result::Result<T, OpeningHoursError>;
