//! Structured error taxonomy and user registration
//!
//! This crate layers a typed error model on top of `colligo-core`:
//!
//! - [`Sentinel`]: well-known failure identities compared by value
//! - [`ValidationError`]: one failed field check
//! - [`MultiError`]: every failure of one validation pass, empty means success
//! - [`RegistryError`]: the surfaced error, with context wrapping that keeps
//!   sentinels discoverable
//!
//! [`UserRegistry`] produces these errors and [`dispatch`] consumes them,
//! turning a [`Classification`] into user-facing messages.
//!
//! # Example
//!
//! ```rust
//! use colligo_registry::{Sentinel, UserRegistry};
//!
//! let mut registry = UserRegistry::new();
//! registry.register("alice", "alice@example.com", "s3cretpass").unwrap();
//!
//! let error = registry
//!     .register("alice", "other@example.com", "s3cretpass")
//!     .unwrap_err();
//! assert!(error.is(Sentinel::UserExists));
//!
//! let error = registry.register("ab", "nope", "12345").unwrap_err();
//! let fields = error.as_multi().unwrap().fields();
//! assert_eq!(fields, vec!["username", "email", "password"]);
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod user;
pub mod validation;

// Re-export key types
pub use classify::{classify, classify_error, find_sentinel, Classification};
pub use config::{ConfigError, ValidationConfig, ValidationConfigBuilder};
pub use dispatch::{describe, handle_registration, Report};
pub use error::{MultiError, RegistryError, Result, Sentinel, ValidationError, WrapErr};
pub use registry::UserRegistry;
pub use user::{User, UserId};
