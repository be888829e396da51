use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    MissingOneOf {
        fields: &'static [&'static str],
    },
    RequiredWith {
        field: &'static str,
        other: &'static str,
    },
    InvalidRange {
        start: &'static str,
        end: &'static str,
    },
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidApiUrl {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::TooMany { field, max, actual } => {
                write!(f, "too many {field} entries: {actual} (max {max})")
            }
            Self::MissingOneOf { fields } => {
                write!(f, "at least one of {} is required", fields.join(", "))
            }
            Self::RequiredWith { field, other } => {
                write!(f, "{field} is required when {other} is set")
            }
            Self::InvalidRange { start, end } => write!(f, "{start} must not be after {end}"),
            Self::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidApiUrl { input } => write!(f, "invalid API base URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value` and reject it when nothing is left.
pub(crate) fn non_blank(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn at_most<T>(
    field: &'static str,
    items: &[T],
    max: usize,
) -> Result<(), ValidationError> {
    if items.len() > max {
        return Err(ValidationError::TooMany {
            field,
            max,
            actual: items.len(),
        });
    }
    Ok(())
}
