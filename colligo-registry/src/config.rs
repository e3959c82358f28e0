//! Validation thresholds

use thiserror::Error;

/// Default configuration constants
pub mod defaults {
    /// Shortest accepted username, in characters
    pub const MIN_USERNAME_LEN: usize = 3;

    /// Longest accepted username, in characters
    pub const MAX_USERNAME_LEN: usize = 50;

    /// Shortest accepted password, in characters
    pub const MIN_PASSWORD_LEN: usize = 8;
}

/// Invalid validation configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A minimum length of zero would accept empty input
    #[error("{field} must be greater than 0")]
    ZeroMinimum {
        /// The offending setting
        field: &'static str,
    },

    /// Username bounds are inverted
    #[error("min_username_len ({min}) exceeds max_username_len ({max})")]
    UsernameBounds {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Thresholds applied by the field checks
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ValidationConfig {
    /// Shortest accepted username
    pub min_username_len: usize,
    /// Longest accepted username
    pub max_username_len: usize,
    /// Shortest accepted password
    pub min_password_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_len: defaults::MIN_USERNAME_LEN,
            max_username_len: defaults::MAX_USERNAME_LEN,
            min_password_len: defaults::MIN_PASSWORD_LEN,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with tighter limits
    pub fn strict() -> Self {
        Self {
            min_username_len: 4,
            max_username_len: 32,
            min_password_len: 12,
        }
    }

    /// Create a builder starting from the defaults
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    /// Check that the thresholds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_username_len == 0 {
            return Err(ConfigError::ZeroMinimum {
                field: "min_username_len",
            });
        }

        if self.min_password_len == 0 {
            return Err(ConfigError::ZeroMinimum {
                field: "min_password_len",
            });
        }

        if self.min_username_len > self.max_username_len {
            return Err(ConfigError::UsernameBounds {
                min: self.min_username_len,
                max: self.max_username_len,
            });
        }

        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    config: ValidationConfig,
}

impl ValidationConfigBuilder {
    /// Set the shortest accepted username
    pub fn min_username_len(mut self, len: usize) -> Self {
        self.config.min_username_len = len;
        self
    }

    /// Set the longest accepted username
    pub fn max_username_len(mut self, len: usize) -> Self {
        self.config.max_username_len = len;
        self
    }

    /// Set the shortest accepted password
    pub fn min_password_len(mut self, len: usize) -> Self {
        self.config.min_password_len = len;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ValidationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
