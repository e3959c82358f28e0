//! Layered error types
//!
//! Three cooperating shapes carry registry failures:
//!
//! - [`Sentinel`]: a closed set of well-known failure identities, compared by
//!   value and never by message text
//! - [`ValidationError`]: exactly one failed field check
//! - [`MultiError`]: every field failure collected during one validation pass
//!
//! [`RegistryError`] is the single error type surfaced by this crate. It can
//! carry any of the shapes above, wrap them in additional context, or hold an
//! opaque foreign error. Wrapping never hides a sentinel:
//! [`RegistryError::is`] looks through every layer.

use std::error::Error as StdError;
use std::fmt;

use colligo_core::CoreError;
use thiserror::Error;

use crate::classify::find_sentinel;
use crate::config::ConfigError;

/// Well-known failure categories
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Sentinel {
    /// Username or email already belongs to a registered user
    #[error("user already exists")]
    UserExists,

    /// Contact address is malformed
    #[error("invalid email format")]
    InvalidEmail,

    /// Secret does not meet the strength requirements
    #[error("password is too weak")]
    WeakPassword,

    /// Lookup target does not exist
    #[error("user not found")]
    UserNotFound,
}

impl Sentinel {
    /// Every sentinel identity
    pub const ALL: [Sentinel; 4] = [
        Sentinel::UserExists,
        Sentinel::InvalidEmail,
        Sentinel::WeakPassword,
        Sentinel::UserNotFound,
    ];

    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            Sentinel::UserExists => "user_exists",
            Sentinel::InvalidEmail => "invalid_email",
            Sentinel::WeakPassword => "weak_password",
            Sentinel::UserNotFound => "user_not_found",
        }
    }
}

/// A single failed field check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed for {field}: {message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Create a validation error for `field`
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The input that failed
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable cause
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors collected during one validation pass
///
/// Collection order is preserved. An empty `MultiError` means "no error";
/// [`into_result`](Self::into_result) turns it into `Ok(())` so it is never
/// surfaced as a failure.
#[derive(Debug, Default)]
pub struct MultiError {
    errors: Vec<RegistryError>,
}

impl MultiError {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn push(&mut self, error: impl Into<RegistryError>) {
        self.errors.push(error.into());
    }

    /// Record the error of a failed check; successful checks are ignored
    pub fn check<E: Into<RegistryError>>(&mut self, result: std::result::Result<(), E>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    /// Number of collected errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when nothing was collected
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collected errors in collection order
    pub fn errors(&self) -> &[RegistryError] {
        &self.errors
    }

    /// Iterate over the collected errors
    pub fn iter(&self) -> std::slice::Iter<'_, RegistryError> {
        self.errors.iter()
    }

    /// Returns true if any collected error, at any nesting depth, carries
    /// `sentinel`
    pub fn contains(&self, sentinel: Sentinel) -> bool {
        self.errors.iter().any(|error| {
            error.is(sentinel) || error.as_multi().is_some_and(|m| m.contains(sentinel))
        })
    }

    /// Fields of the collected validation errors, in collection order
    pub fn fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(RegistryError::as_validation)
            .map(ValidationError::field)
            .collect()
    }

    /// `Ok(())` if nothing was collected, otherwise the collection as an error
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Multi(self))
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no errors"),
            [single] => write!(f, "{single}"),
            errors => {
                write!(f, "{} errors occurred: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for MultiError {}

impl From<Vec<RegistryError>> for MultiError {
    fn from(errors: Vec<RegistryError>) -> Self {
        Self { errors }
    }
}

impl IntoIterator for MultiError {
    type Item = RegistryError;
    type IntoIter = std::vec::IntoIter<RegistryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a RegistryError;
    type IntoIter = std::slice::Iter<'a, RegistryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Registry-level errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Well-known failure category
    #[error(transparent)]
    Sentinel(#[from] Sentinel),

    /// Single field check failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Aggregate of a validation pass
    #[error(transparent)]
    Multi(#[from] MultiError),

    /// Another error with context attached by a calling layer
    #[error("{context}: {source}")]
    Context {
        /// What the calling layer was doing
        context: String,
        /// The wrapped error
        source: Box<RegistryError>,
    },

    /// Invalid validation configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Precondition failure from the core containers and aggregates
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Foreign error with no bucket in the taxonomy
    #[error("{0}")]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl RegistryError {
    /// Wrap an opaque foreign error
    pub fn other<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        RegistryError::Other(Box::new(error))
    }

    /// Attach context, keeping the wrapped error classifiable
    pub fn wrap(self, context: impl Into<String>) -> Self {
        RegistryError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any context layers
    pub fn root(&self) -> &RegistryError {
        let mut current = self;
        while let RegistryError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// The sentinel identity carried by this error, through any wrapping
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self.root() {
            RegistryError::Sentinel(sentinel) => Some(*sentinel),
            RegistryError::Other(error) => find_sentinel(&**error),
            _ => None,
        }
    }

    /// Returns true if this error is, or wraps, `sentinel`
    pub fn is(&self, sentinel: Sentinel) -> bool {
        self.sentinel() == Some(sentinel)
    }

    /// The validation error beneath any context layers
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.root() {
            RegistryError::Validation(error) => Some(error),
            _ => None,
        }
    }

    /// The multi-error beneath any context layers
    pub fn as_multi(&self) -> Option<&MultiError> {
        match self.root() {
            RegistryError::Multi(errors) => Some(errors),
            _ => None,
        }
    }

    /// Context strings from the outermost layer inwards
    pub fn contexts(&self) -> Vec<&str> {
        let mut contexts = Vec::new();
        let mut current = self;
        while let RegistryError::Context { context, source } = current {
            contexts.push(context.as_str());
            current = source;
        }
        contexts
    }
}

/// Extension trait for attaching context to fallible results
pub trait WrapErr<T> {
    /// Wrap the error, if any, with `context`
    fn wrap_err(self, context: impl Into<String>) -> Result<T>;

    /// Wrap the error, if any, with lazily built context
    fn wrap_err_with<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E: Into<RegistryError>> WrapErr<T> for std::result::Result<T, E> {
    fn wrap_err(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|error| error.into().wrap(context))
    }

    fn wrap_err_with<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|error| error.into().wrap(context()))
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
