//! Field checks for user registration
//!
//! Two flavours of check exist:
//!
//! - `validate_*` functions produce a [`ValidationError`] scoped to one
//!   field. [`validate_registration`] runs all of them and collects every
//!   failure into a [`MultiError`] instead of stopping at the first.
//! - `check_*` functions enforce cross-cutting business rules on a single
//!   value and fail with the matching [`Sentinel`].

use crate::config::ValidationConfig;
use crate::error::{MultiError, Result, Sentinel, ValidationError};

/// Field name reported for username failures
pub const USERNAME: &str = "username";
/// Field name reported for email failures
pub const EMAIL: &str = "email";
/// Field name reported for password failures
pub const PASSWORD: &str = "password";

/// Check the username length against the configured bounds
pub fn validate_username(
    username: &str,
    config: &ValidationConfig,
) -> std::result::Result<(), ValidationError> {
    let len = username.chars().count();

    if len < config.min_username_len {
        return Err(ValidationError::new(
            USERNAME,
            format!(
                "must be at least {} characters",
                config.min_username_len
            ),
        ));
    }

    if len > config.max_username_len {
        return Err(ValidationError::new(
            USERNAME,
            format!("must be at most {} characters", config.max_username_len),
        ));
    }

    Ok(())
}

/// Check that the email looks like an address
pub fn validate_email(email: &str) -> std::result::Result<(), ValidationError> {
    if is_email_like(email) {
        Ok(())
    } else {
        Err(ValidationError::new(EMAIL, "must contain '@'"))
    }
}

/// Check the password length against the configured minimum
pub fn validate_password(
    password: &str,
    config: &ValidationConfig,
) -> std::result::Result<(), ValidationError> {
    if password.chars().count() < config.min_password_len {
        return Err(ValidationError::new(
            PASSWORD,
            format!(
                "must be at least {} characters",
                config.min_password_len
            ),
        ));
    }
    Ok(())
}

/// Run every field check, collecting all failures
///
/// Failures are collected in the order username, email, password. Returns
/// `Ok(())` only when every check passed.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    config: &ValidationConfig,
) -> Result<()> {
    let mut errors = MultiError::new();
    errors.check(validate_username(username, config));
    errors.check(validate_email(email));
    errors.check(validate_password(password, config));
    errors.into_result()
}

/// Business rule: contact addresses must be well formed
pub fn check_email(email: &str) -> std::result::Result<(), Sentinel> {
    if is_email_like(email) {
        Ok(())
    } else {
        Err(Sentinel::InvalidEmail)
    }
}

/// Business rule: secrets must meet the configured strength
pub fn check_password_strength(
    password: &str,
    config: &ValidationConfig,
) -> std::result::Result<(), Sentinel> {
    if password.chars().count() < config.min_password_len {
        Err(Sentinel::WeakPassword)
    } else {
        Ok(())
    }
}

fn is_email_like(email: &str) -> bool {
    email.contains('@')
}
