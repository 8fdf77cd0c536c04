//! Field-level validation shared by the record payloads.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

/// Validation failure for a record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is blank after trim.
    EmptyField(&'static str),
    /// Field must hold a whole number.
    NotAnInteger { field: &'static str, value: String },
    /// Field must hold a `YYYY-MM-DD` calendar date.
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField(field) => field,
            Self::NotAnInteger { field, .. } => field,
            Self::InvalidDate { field, .. } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::NotAnInteger { field, value } => {
                write!(f, "{field} must be a whole number, got `{value}`")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} must be a date in YYYY-MM-DD form, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects blank text.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Parses trimmed text into an integer.
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field,
            value: trimmed.to_string(),
        })
}

/// Checks a `YYYY-MM-DD` date: month 1..=12, day within the month.
pub fn check_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    let invalid = || ValidationError::InvalidDate {
        field,
        value: trimmed.to_string(),
    };

    let captures = DATE_SHAPE_RE.captures(trimmed).ok_or_else(invalid)?;
    let year: u32 = captures[1].parse().map_err(|_| invalid())?;
    let month: u32 = captures[2].parse().map_err(|_| invalid())?;
    let day: u32 = captures[3].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return Err(invalid());
    }
    Ok(())
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
