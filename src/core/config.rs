//! Service configuration
//!
//! Holds the settings a [`PathService`](crate::infra::filesystem::PathService)
//! is constructed with. The struct is serde-deserializable so host
//! applications can embed it in their own configuration files.
//!
//! The `PATHKIT_VERBOSITY` environment variable overrides the verbosity when
//! loading through [`PathServiceConfig::from_env`].

use std::env;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_VERBOSITY, ENV_VERBOSITY, MAX_VERBOSITY};

/// Settings for a path service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathServiceConfig {
    /// Log verbosity: 0 logs errors only, higher values log progressively more
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,
}

fn default_verbosity() -> u8 {
    DEFAULT_VERBOSITY
}

impl PathServiceConfig {
    /// Create a configuration with the given verbosity
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Create a configuration from the default, overridden by `PATHKIT_VERBOSITY`
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Apply the `PATHKIT_VERBOSITY` override to this configuration
    ///
    /// Values that don't parse as an integer are ignored; values above the
    /// maximum verbosity are clamped.
    #[must_use]
    pub fn with_env_override(self) -> Self {
        match env::var(ENV_VERBOSITY) {
            Ok(value) => self.with_override(&value),
            Err(_) => self,
        }
    }

    fn with_override(self, value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(level) => Self {
                verbosity: u8::try_from(level)
                    .unwrap_or(MAX_VERBOSITY)
                    .min(MAX_VERBOSITY),
            },
            Err(_) => self,
        }
    }
}

impl Default for PathServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VERBOSITY)
    }
}
