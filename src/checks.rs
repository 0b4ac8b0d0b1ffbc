/*!
Precondition checks.

Each check returns the validated value on success so that it can be used inline, e.g. in a
constructor. On failure the check returns a [`CheckError`] carrying a formatted message. Checks never
retry or recover.
*/

use std::fmt;

use crate::errors::{CheckError, CheckResult};

/**
Check that `value` is present.

On failure the error message is `"{value_name} must be not-null"`.
*/
pub fn require_not_null<T>(value: Option<T>, value_name: &str) -> CheckResult<T> {
    require_not_null_with(value, || format!("{value_name} must be not-null"))
}

/**
Check that `value` is present, using a custom error message.

`message` is only invoked if the check fails.
*/
pub fn require_not_null_with<T, F>(value: Option<T>, message: F) -> CheckResult<T>
where
    F: FnOnce() -> String,
{
    match value {
        Some(value) => Ok(value),
        None => {
            let message = message();
            log::debug!("Not-null check failed: {message}");
            Err(CheckError::MissingValue(message))
        }
    }
}

/**
Check that `value` is strictly greater than zero.

Works for any integer or floating point type. NaN and negative zero are not positive.

On failure the error message is `"{value_name} must be positive, actual: {value}"`.
*/
pub fn require_positive<T>(value: T, value_name: &str) -> CheckResult<T>
where
    T: Copy + PartialOrd + Default + fmt::Display,
{
    require_positive_with(value, |actual| {
        format!("{value_name} must be positive, actual: {actual}")
    })
}

/**
Check that `value` is strictly greater than zero, using a custom error message.

`message` receives the offending value and is only invoked if the check fails.
*/
pub fn require_positive_with<T, F>(value: T, message: F) -> CheckResult<T>
where
    T: Copy + PartialOrd + Default,
    F: FnOnce(T) -> String,
{
    if value > T::default() {
        return Ok(value);
    }

    let message = message(value);
    log::debug!("Positive value check failed: {message}");
    Err(CheckError::ConstraintViolated(message))
}
