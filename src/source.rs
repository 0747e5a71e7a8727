//! Key/value sources for variable lookups
//!
//! The engine reads raw values through the [`EnvSource`] trait so that
//! tests and embedders can substitute a fixed map for the real process
//! environment.

use std::collections::HashMap;

/// Read-only lookup of named string values.
pub trait EnvSource: Send + Sync {
    /// Look up a value by exact key name. `None` when the key is unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed in-memory source.
///
/// Useful for tests and for hermetic binds that must not observe the real
/// process environment.
///
/// # Example
/// ```rust
/// use envbind::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with("DB_HOST", "localhost");
/// assert_eq!(env.var("DB_HOST").as_deref(), Some("localhost"));
/// assert_eq!(env.var("MISSING"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Remove a variable.
    pub fn unset(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnv {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}
