//! Error classification for caller-facing dispatch
//!
//! Callers inspect failures by kind, never by message text. [`classify`]
//! resolves an error in a fixed priority:
//!
//! 1. sentinel identity, looking through every context layer
//! 2. [`ValidationError`](crate::ValidationError) shape
//! 3. [`MultiError`](crate::MultiError), classifying each member with the
//!    same rules
//! 4. a documented precondition failure from `colligo_core`
//! 5. anything else is unclassified and keeps its full message
//!
//! Foreign wrappers are looked through at every step: a taxonomy error held
//! in [`RegistryError::Other`] or reached via `source()` classifies exactly
//! as it would unwrapped.

use std::error::Error as StdError;

use colligo_core::{map, CoreError};

use crate::error::{MultiError, RegistryError, Sentinel, ValidationError};

/// Outcome of classifying an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Matches a well-known failure category
    Sentinel(Sentinel),
    /// Failed field check
    Validation {
        /// The input that failed
        field: String,
        /// Human-readable cause
        message: String,
    },
    /// Aggregate; each member classified in collection order
    Multi(Vec<Classification>),
    /// Expected failure of a core container or aggregate, such as the
    /// maximum of an empty sequence
    Precondition(CoreError),
    /// No bucket in the taxonomy; the rendered error is kept so it can
    /// still be surfaced
    Unclassified(String),
}

impl Classification {
    /// Returns false only for an aggregate with nothing in it
    pub fn is_failure(&self) -> bool {
        !matches!(self, Classification::Multi(items) if items.is_empty())
    }

    /// Every sentinel in this classification, depth first
    pub fn sentinels(&self) -> Vec<Sentinel> {
        match self {
            Classification::Sentinel(sentinel) => vec![*sentinel],
            Classification::Multi(items) => items.iter().flat_map(Self::sentinels).collect(),
            _ => Vec::new(),
        }
    }

    /// Every failed field in this classification, depth first
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Classification::Validation { field, .. } => vec![field.as_str()],
            Classification::Multi(items) => items.iter().flat_map(Self::fields).collect(),
            _ => Vec::new(),
        }
    }
}

/// Classify a registry error
pub fn classify(error: &RegistryError) -> Classification {
    if let Some(sentinel) = error.sentinel() {
        return Classification::Sentinel(sentinel);
    }

    match error.root() {
        RegistryError::Validation(validation) => validation_shape(validation),
        RegistryError::Multi(errors) => multi_shape(errors),
        RegistryError::Core(core) => Classification::Precondition(*core),
        RegistryError::Other(inner) => classify_chain(&**inner)
            .unwrap_or_else(|| Classification::Unclassified(error.to_string())),
        _ => Classification::Unclassified(error.to_string()),
    }
}

/// Classify an arbitrary error by walking its source chain
///
/// A [`Sentinel`] anywhere in the chain wins; otherwise the first taxonomy
/// error found decides the outcome. A chain with none is unclassified.
pub fn classify_error(error: &(dyn StdError + 'static)) -> Classification {
    if let Some(sentinel) = find_sentinel(error) {
        return Classification::Sentinel(sentinel);
    }

    classify_chain(error).unwrap_or_else(|| Classification::Unclassified(error.to_string()))
}

/// Find the sentinel identity anywhere in an error's source chain
pub fn find_sentinel(error: &(dyn StdError + 'static)) -> Option<Sentinel> {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(sentinel) = err.downcast_ref::<Sentinel>() {
            return Some(*sentinel);
        }
        if let Some(registry_error) = downcast_registry_error(err) {
            return registry_error.sentinel();
        }
        current = err.source();
    }
    None
}

/// Classify the first taxonomy error found in a source chain
fn classify_chain(error: &(dyn StdError + 'static)) -> Option<Classification> {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(registry_error) = downcast_registry_error(err) {
            return Some(classify(registry_error));
        }
        if let Some(validation) = err.downcast_ref::<ValidationError>() {
            return Some(validation_shape(validation));
        }
        if let Some(errors) = err.downcast_ref::<MultiError>() {
            return Some(multi_shape(errors));
        }
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return Some(Classification::Precondition(*core));
        }
        current = err.source();
    }
    None
}

fn validation_shape(validation: &ValidationError) -> Classification {
    Classification::Validation {
        field: validation.field().to_string(),
        message: validation.message().to_string(),
    }
}

fn multi_shape(errors: &MultiError) -> Classification {
    Classification::Multi(map(errors.errors(), classify))
}

fn downcast_registry_error<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a RegistryError> {
    // Context layers expose their boxed inner error as the source
    error
        .downcast_ref::<RegistryError>()
        .or_else(|| error.downcast_ref::<Box<RegistryError>>().map(|boxed| &**boxed))
}
