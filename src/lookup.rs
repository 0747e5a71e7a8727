//! Standalone typed lookups
//!
//! Direct single-key lookups with a caller-supplied fallback, for values
//! needed outside the record-binding flow. Unlike binding, an unparsable
//! set value silently falls back to the default instead of erroring.

use crate::source::EnvSource;

/// Look up `name` as a base-10 signed integer, falling back to `default`
/// when unset or unparsable.
pub fn int_var(env: &dyn EnvSource, name: &str, default: i64) -> i64 {
    env.var(name)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Look up `name` as a boolean (`true`/`false`/`t`/`f`/`1`/`0`,
/// case-insensitive), falling back to `default` when unset or unparsable.
pub fn bool_var(env: &dyn EnvSource, name: &str, default: bool) -> bool {
    env.var(name)
        .and_then(|value| crate::binder::parse_bool(&value))
        .unwrap_or(default)
}

/// Look up `name` as a list of strings split on `sep`, falling back to
/// `default` when unset or empty.
pub fn list_var(env: &dyn EnvSource, name: &str, default: &[&str], sep: &str) -> Vec<String> {
    match env.var(name) {
        Some(value) if !value.is_empty() => value.split(sep).map(str::to_string).collect(),
        _ => default.iter().map(|s| (*s).to_string()).collect(),
    }
}
