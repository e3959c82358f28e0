//! Registered user record

use std::fmt;

/// Identifier assigned by the registry, starting at 1
pub type UserId = u64;

/// A registered user
///
/// The password is stored as given and never leaves the struct through
/// `Debug` or serialization.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct User {
    /// Registry-assigned identifier
    pub id: UserId,
    /// Unique login name
    pub username: String,
    /// Unique contact address
    pub email: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    password: String,
}

impl User {
    pub(crate) fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// The stored password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Compare a candidate against the stored password
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub(crate) fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub(crate) fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
