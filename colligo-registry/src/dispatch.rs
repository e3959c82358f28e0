//! Translation of classified errors into user-facing messages
//!
//! This is the consuming side of the taxonomy: it never inspects message
//! text, only the [`Classification`] of an error. Unclassified failures are
//! still reported, with their full message.

use crate::classify::{classify, Classification};
use crate::error::{RegistryError, Result, Sentinel};
use crate::registry::UserRegistry;

/// Outcome of one dispatched operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// What the operation was about (e.g. the username being registered)
    pub subject: String,
    /// Whether the operation succeeded
    pub success: bool,
    /// User-facing messages, one per reported problem
    pub messages: Vec<String>,
}

impl Report {
    /// Create a successful report
    pub fn success(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            success: true,
            messages: vec![message.into()],
        }
    }

    /// Create a failed report from a classification
    pub fn failure(subject: impl Into<String>, classification: &Classification) -> Self {
        Self {
            subject: subject.into(),
            success: false,
            messages: messages(classification),
        }
    }
}

/// Message shown for each sentinel
pub fn sentinel_message(sentinel: Sentinel) -> &'static str {
    match sentinel {
        Sentinel::UserExists => "that username or email is already registered",
        Sentinel::InvalidEmail => "the email address is not valid",
        Sentinel::WeakPassword => "the password is too weak",
        Sentinel::UserNotFound => "no such user",
    }
}

/// User-facing messages for a classification, in classification order
pub fn messages(classification: &Classification) -> Vec<String> {
    match classification {
        Classification::Sentinel(sentinel) => vec![sentinel_message(*sentinel).to_string()],
        Classification::Validation { field, message } => vec![format!("{field}: {message}")],
        Classification::Multi(items) => items.iter().flat_map(messages).collect(),
        Classification::Precondition(error) => vec![error.to_string()],
        Classification::Unclassified(message) => vec![format!("unexpected error: {message}")],
    }
}

/// User-facing messages for an error
pub fn describe(error: &RegistryError) -> Vec<String> {
    messages(&classify(error))
}

/// Turn the result of any registry operation into a [`Report`]
///
/// An error that classifies as an empty aggregate counts as success.
pub fn report<T, F>(subject: &str, result: Result<T>, on_success: F) -> Report
where
    F: FnOnce(T) -> String,
{
    match result {
        Ok(value) => Report::success(subject, on_success(value)),
        Err(error) => {
            let classification = classify(&error);
            if classification.is_failure() {
                log::warn!("{subject}: {error}");
                Report::failure(subject, &classification)
            } else {
                Report {
                    subject: subject.to_string(),
                    success: true,
                    messages: Vec::new(),
                }
            }
        }
    }
}

/// Attempt a registration and report the outcome
pub fn handle_registration(
    registry: &mut UserRegistry,
    username: &str,
    email: &str,
    password: &str,
) -> Report {
    let result = registry
        .register(username, email, password)
        .map(|user| format!("registered '{}' with id {}", user.username, user.id));
    report(username, result, |message| message)
}
