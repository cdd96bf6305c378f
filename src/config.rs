//! Explicit runtime configuration
//!
//! Values are passed to the functions that need them rather than read from the
//! process environment at call time. [`SupportConfig::from_env`] is the one
//! place environment variables are consulted.

use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{Result, SupportError};

/// Default bcrypt cost factor
pub const DEFAULT_HASH_ROUNDS: u32 = 10;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "testing" => Self::Testing,
            _ => Self::Development,
        })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// Settings consumed by [`crate::helpers::hash`] and
/// [`crate::helpers::is_production`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportConfig {
    /// bcrypt cost factor
    pub hash_rounds: u32,
    pub environment: Environment,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            hash_rounds: DEFAULT_HASH_ROUNDS,
            environment: Environment::default(),
        }
    }
}

impl SupportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_hash_rounds(mut self, rounds: u32) -> Self {
        self.hash_rounds = rounds;
        self
    }

    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Build from `HASH_ROUNDS` and `APP_ENV` (falling back to `NODE_ENV`)
    ///
    /// Missing variables keep their defaults; a `HASH_ROUNDS` that is not a
    /// number is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("HASH_ROUNDS") {
            config.hash_rounds = raw.trim().parse().map_err(|e| {
                SupportError::Configuration(format!("HASH_ROUNDS={raw:?}: {e}"))
            })?;
        }

        if let Some(raw) = lookup("APP_ENV").or_else(|| lookup("NODE_ENV")) {
            let environment: Environment = raw.parse().unwrap_or_default();
            if environment == Environment::Development
                && !raw.trim().eq_ignore_ascii_case("development")
                && !raw.trim().eq_ignore_ascii_case("dev")
            {
                warn!(value = %raw, "unrecognised environment, using development");
            }
            config.environment = environment;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SupportConfig::default();
        assert_eq!(config.hash_rounds, 10);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(SupportConfig::from_lookup(lookup(&[])).unwrap(), config);
    }

    #[test]
    fn test_from_lookup() {
        let config = SupportConfig::from_lookup(lookup(&[("HASH_ROUNDS", " 12 "), ("APP_ENV", "Production")])).unwrap();
        assert_eq!(config.hash_rounds, 12);
        assert!(config.environment.is_production());
    }

    #[test]
    fn test_node_env_fallback() {
        let config = SupportConfig::from_lookup(lookup(&[("NODE_ENV", "test")])).unwrap();
        assert_eq!(config.environment, Environment::Testing);

        let config = SupportConfig::from_lookup(lookup(&[("NODE_ENV", "production"), ("APP_ENV", "dev")])).unwrap();
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_invalid_hash_rounds() {
        let err = SupportConfig::from_lookup(lookup(&[("HASH_ROUNDS", "ten")])).unwrap_err();
        assert!(matches!(err, SupportError::Configuration(_)));
    }

    #[test]
    fn test_builders_and_display() {
        let config = SupportConfig::new()
            .with_hash_rounds(4)
            .with_environment(Environment::Production);
        assert_eq!(config.hash_rounds, 4);
        assert_eq!(config.environment.to_string(), "production");
    }
}
