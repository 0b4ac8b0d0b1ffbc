/*!
This module contains error types returned by the precondition checks.

Comparison chains never fail on their own. The only failures that can surface through a chain come
from caller-supplied comparators, and those are passed through untouched.
*/

use std::fmt;

/// Alias for a [`Result`] that wraps a [`CheckError`].
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors produced when a precondition does not hold.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckError {
    /// Variant for a required value that was absent. The value is the formatted message.
    MissingValue(String),

    /// Variant for a value that was present but violated a constraint. The value is the formatted
    /// message.
    ConstraintViolated(String),
}

/// Public methods
impl CheckError {
    /// Get the formatted message describing the failed check.
    pub fn message(&self) -> &str {
        match self {
            CheckError::MissingValue(msg) => msg,
            CheckError::ConstraintViolated(msg) => msg,
        }
    }
}

impl std::error::Error for CheckError {}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::MissingValue(msg) => write!(f, "{}", msg),
            CheckError::ConstraintViolated(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_writes_only_the_message() {
        let missing = CheckError::MissingValue("name must be not-null".to_owned());
        let violated = CheckError::ConstraintViolated("size must be positive, actual: 0".to_owned());

        assert_eq!(missing.to_string(), "name must be not-null");
        assert_eq!(violated.to_string(), "size must be positive, actual: 0");
        assert_eq!(violated.message(), "size must be positive, actual: 0");
    }
}
