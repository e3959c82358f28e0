//! In-memory user registry
//!
//! The registry is a plain value owned by its caller. It performs no
//! synchronization; share it across threads only behind an external lock.

use std::collections::BTreeMap;

use crate::config::ValidationConfig;
use crate::error::{RegistryError, Result, Sentinel, WrapErr};
use crate::user::{User, UserId};
use crate::validation::{check_email, check_password_strength, validate_registration};

/// Registered users keyed by id
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
    config: ValidationConfig,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry {
    /// Create an empty registry with default validation thresholds
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
            config: ValidationConfig::default(),
        }
    }

    /// Create an empty registry with custom thresholds
    pub fn with_config(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Active validation thresholds
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Register a new user
    ///
    /// Runs every field check first and reports all failures together as a
    /// [`MultiError`](crate::MultiError). A username or email already in use
    /// fails with [`Sentinel::UserExists`].
    ///
    /// Usernames and emails are both compared case-insensitively, using
    /// Unicode lowercase folding: `Zoë` and `ZOË` name the same user.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<&User> {
        validate_registration(username, email, password, &self.config)?;

        if self.username_owner(username).is_some() {
            log::info!("rejected registration: username '{username}' is taken");
            return Err(RegistryError::from(Sentinel::UserExists)
                .wrap(format!("username '{username}'")));
        }

        if self.email_owner(email).is_some() {
            log::info!("rejected registration: email '{email}' is taken");
            return Err(RegistryError::from(Sentinel::UserExists).wrap(format!("email '{email}'")));
        }

        let id = self.next_id;
        self.next_id += 1;

        log::debug!("registered user {id} ({username})");
        Ok(&*self
            .users
            .entry(id)
            .or_insert(User::new(id, username, email, password)))
    }

    /// Look up a user by id
    pub fn get_user(&self, id: UserId) -> Result<&User> {
        self.users.get(&id).ok_or_else(|| not_found(id))
    }

    /// Look up a user by username, ignoring case
    pub fn find_by_username(&self, username: &str) -> Result<&User> {
        self.username_owner(username)
            .and_then(|id| self.users.get(&id))
            .ok_or_else(|| {
                RegistryError::from(Sentinel::UserNotFound).wrap(format!("username '{username}'"))
            })
    }

    /// Replace a user's email
    ///
    /// Checks run in this order: [`Sentinel::InvalidEmail`] for a malformed
    /// address, [`Sentinel::UserNotFound`] for an unknown id, then
    /// [`Sentinel::UserExists`] when another user owns the address.
    pub fn update_email(&mut self, id: UserId, email: &str) -> Result<()> {
        check_email(email).wrap_err_with(|| format!("updating email for user {id}"))?;

        if !self.users.contains_key(&id) {
            return Err(not_found(id));
        }

        if let Some(owner) = self.email_owner(email) {
            if owner != id {
                return Err(RegistryError::from(Sentinel::UserExists)
                    .wrap(format!("email '{email}'"))
                    .wrap(format!("updating email for user {id}")));
            }
        }

        let user = self.users.get_mut(&id).ok_or_else(|| not_found(id))?;
        user.set_email(email);
        log::debug!("updated email for user {id}");
        Ok(())
    }

    /// Replace a user's password
    ///
    /// Fails with [`Sentinel::WeakPassword`] when the password is shorter
    /// than the configured minimum.
    pub fn update_password(&mut self, id: UserId, password: &str) -> Result<()> {
        check_password_strength(password, &self.config)
            .wrap_err_with(|| format!("updating password for user {id}"))?;

        let user = self.users.get_mut(&id).ok_or_else(|| not_found(id))?;
        user.set_password(password);
        log::debug!("updated password for user {id}");
        Ok(())
    }

    /// Re-run every field check against a stored user
    pub fn validate_user(&self, user: &User) -> Result<()> {
        validate_registration(&user.username, &user.email, user.password(), &self.config)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true when nobody is registered
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Registered users in id order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    fn username_owner(&self, username: &str) -> Option<UserId> {
        self.users
            .values()
            .find(|user| same_identity(&user.username, username))
            .map(|user| user.id)
    }

    fn email_owner(&self, email: &str) -> Option<UserId> {
        self.users
            .values()
            .find(|user| same_identity(&user.email, email))
            .map(|user| user.id)
    }
}

/// Case-insensitive comparison with full Unicode lowercase folding
fn same_identity(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn not_found(id: UserId) -> RegistryError {
    RegistryError::from(Sentinel::UserNotFound).wrap(format!("user id {id}"))
}
