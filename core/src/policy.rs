//! # AbsencePolicy: Absent → Failed Coercion
//!
//! Absence is not an error until a caller decides it is. The decision point
//! is explicit: every conversion that can turn `Absent` into `Failed` takes
//! an `AbsencePolicy` (or uses `AbsencePolicy::default()`), so two call sites
//! can report "not found" differently without touching shared state.

use crate::error::Error;
use serde::Deserialize;
use thiserror::Error as ThisError;

/// Which error stands in for a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsencePolicy {
    not_found: Error,
}

impl AbsencePolicy {
    pub fn new(not_found: Error) -> Self {
        Self { not_found }
    }

    /// The error substituted for `Absent`.
    pub fn not_found(&self) -> &Error {
        &self.not_found
    }

    /// Loads a policy from a TOML document.
    ///
    /// ```toml
    /// [not_found]
    /// code = "UserMissing"
    /// message = "no user with that id"
    /// ```
    ///
    /// A document without a `[not_found]` table yields the default policy.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AbsencePolicyConfig = toml::from_str(source)?;
        Self::try_from(config)
    }
}

impl Default for AbsencePolicy {
    fn default() -> Self {
        Self::new(Error::not_found())
    }
}

/// Serialized form of an [`AbsencePolicy`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbsencePolicyConfig {
    #[serde(default)]
    pub not_found: Option<ErrorConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorConfig {
    pub code: String,
    pub message: String,
}

impl TryFrom<AbsencePolicyConfig> for AbsencePolicy {
    type Error = ConfigError;

    fn try_from(config: AbsencePolicyConfig) -> Result<Self, Self::Error> {
        match config.not_found {
            None => Ok(Self::default()),
            Some(ErrorConfig { code, .. }) if code.trim().is_empty() => {
                Err(ConfigError::EmptyCode)
            }
            Some(ErrorConfig { code, message }) => Ok(Self::new(Error::new(code, message))),
        }
    }
}

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("failed to parse absence policy: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("the not_found error code must not be empty")]
    EmptyCode,
}
