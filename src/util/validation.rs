//! Client-side form validation.
//!
//! Runs before any request is built; a `ValidationError` never reaches the
//! network layer.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use crate::net::types::NewTrainingEntry;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

static DATE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.", min = PASSWORD_MIN_LEN)]
    PasswordTooShort,
    #[error("Password must be at most {max} characters.", max = PASSWORD_MAX_LEN)]
    PasswordTooLong,
    #[error("Both password fields are required.")]
    MissingPasswords,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Choose a training type.")]
    MissingType,
    #[error("Enter a valid number of hours.")]
    InvalidHours,
    #[error("Enter a date as YYYY-MM-DD.")]
    InvalidDate,
}

fn matches(re: Option<&Regex>, value: &str) -> bool {
    re.is_some_and(|re| re.is_match(value))
}

pub fn is_valid_email(email: &str) -> bool {
    matches(Option::as_ref(&EMAIL_RE), email)
}

/// Trimmed `(email, password)` for the login form.
///
/// # Errors
///
/// `MissingCredentials` when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed `(email, password)` for the registration form.
///
/// # Errors
///
/// The first failing rule, checked in form order.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(String, String), ValidationError> {
    let (email, password) = validate_login(email, password)?;
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    check_password_length(&password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok((email, password))
}

fn check_password_length(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        Err(ValidationError::PasswordTooShort)
    } else if len > PASSWORD_MAX_LEN {
        Err(ValidationError::PasswordTooLong)
    } else {
        Ok(())
    }
}

/// New password for the reset form.
///
/// # Errors
///
/// `MissingPasswords` or `PasswordMismatch`.
pub fn validate_password_reset(password: &str, confirm: &str) -> Result<String, ValidationError> {
    if password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingPasswords);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(password.to_owned())
}

/// Email for the forgot-password form.
///
/// # Errors
///
/// `InvalidEmail` when the trimmed value is not an address.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if is_valid_email(email) { Ok(email.to_owned()) } else { Err(ValidationError::InvalidEmail) }
}

/// Build a training entry from raw form fields.
///
/// # Errors
///
/// `MissingType`, `InvalidHours` (blank, unparsable, non-finite, negative) or
/// `InvalidDate`.
pub fn validate_entry(kind: &str, hours: &str, date: &str) -> Result<NewTrainingEntry, ValidationError> {
    let kind = kind.trim();
    if kind.is_empty() {
        return Err(ValidationError::MissingType);
    }
    let hours: f64 = hours.trim().parse().map_err(|_| ValidationError::InvalidHours)?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(ValidationError::InvalidHours);
    }
    let date = date.trim();
    if !matches(Option::as_ref(&DATE_RE), date) {
        return Err(ValidationError::InvalidDate);
    }
    Ok(NewTrainingEntry { kind: kind.to_owned(), hours, date: date.to_owned() })
}
