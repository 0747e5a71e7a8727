//! The binding engine
//!
//! [`Binder`] walks a record's binding table and populates each field from
//! the environment: resolve the raw value (variable, then `.env` overlay,
//! then default), enforce required-ness, apply the named transform, coerce
//! into the declared kind, write. Binding is synchronous, fail-fast, and
//! intended to run once per process at startup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::error::{Error, Result};
use crate::record::{BindTarget, EnvField, Environment, Field, FieldSlot, ENV_SELECTOR_VAR};
use crate::source::{EnvSource, ProcessEnv};
use crate::tag::FieldSpec;
use crate::transform::Transform;

/// Default bootstrap file, looked up in the working directory.
const DEFAULT_ENV_FILE: &str = ".env";

/// Binds records to the environment.
///
/// # Example
/// ```rust,no_run
/// use envbind::{BindTarget, Binder, Field};
///
/// #[derive(Default)]
/// struct Config {
///     host: String,
/// }
///
/// impl BindTarget for Config {
///     fn fields(&mut self) -> Option<Vec<Field<'_>>> {
///         Some(vec![Field::text("host", "env:HOST,default:localhost", &mut self.host)])
///     }
/// }
///
/// let mut config = Config::default();
/// Binder::new().bind(&mut config)?;
/// # Ok::<(), envbind::Error>(())
/// ```
pub struct Binder {
    source: Arc<dyn EnvSource>,
    env_file: PathBuf,
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl Binder {
    /// Create a binder reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }

    /// Create a binder reading from a custom source.
    ///
    /// Useful for tests and hermetic binds that must not observe the real
    /// process environment.
    #[must_use]
    pub fn with_source(source: impl EnvSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }

    /// Set the bootstrap file path (default: `.env` in the working
    /// directory). Only read when the active environment is `local`.
    #[must_use]
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Populate `record` from the environment.
    ///
    /// The active environment is resolved from [`ENV_SELECTOR_VAR`]
    /// (default `local`); in `local` the bootstrap file is loaded first so
    /// its entries participate in resolution. Fields bind in declaration
    /// order and the first failure aborts the call — fields written before
    /// the failing one keep their new values.
    ///
    /// # Errors
    ///
    /// [`Error::BootstrapLoad`] when the bootstrap file is expected but
    /// unreadable, [`Error::NotBindable`] when the target exposes no
    /// binding table, and the per-field errors described in
    /// [`Error`](crate::Error).
    pub fn bind<T: BindTarget>(&self, record: &mut T) -> Result<()> {
        let env_name = self
            .source
            .var(ENV_SELECTOR_VAR)
            .unwrap_or_else(|| Environment::Local.as_str().to_string());

        // Bulk-load the local definition file before any field resolution,
        // so its entries behave exactly as if they were pre-set.
        let overlay = if env_name == Environment::Local.as_str() {
            self.load_env_file()?
        } else {
            HashMap::new()
        };

        let Some(fields) = record.fields() else {
            return Err(Error::NotBindable);
        };
        for field in fields {
            self.bind_field(field, &overlay)?;
        }

        // The environment field is set outside the per-field loop, from
        // the selector rather than from a tag.
        if let Some(env_field) = record.environment_field() {
            match env_field {
                EnvField::Name(slot) => *slot = env_name.clone(),
                EnvField::Typed(slot) => {
                    *slot = Environment::from_name(&env_name).unwrap_or_default();
                }
            }
        }

        debug!("bound record in environment '{env_name}'");
        Ok(())
    }

    /// Parse the bootstrap file into an overlay map.
    ///
    /// The overlay is consulted after the live source, which gives the
    /// same precedence as a no-override dotenv load into the process
    /// environment, without mutating global state.
    fn load_env_file(&self) -> Result<HashMap<String, String>> {
        let bootstrap = |source| Error::BootstrapLoad {
            path: self.env_file.clone(),
            source,
        };

        let mut vars = HashMap::new();
        for entry in dotenvy::from_path_iter(&self.env_file).map_err(bootstrap)? {
            let (key, value) = entry.map_err(bootstrap)?;
            vars.insert(key, value);
        }

        debug!(
            "loaded {} entries from '{}'",
            vars.len(),
            self.env_file.display()
        );
        Ok(vars)
    }

    /// Resolve a field's raw value: variable, then overlay, then default.
    ///
    /// A variable set to the empty string resolves to the empty string;
    /// the default only applies when the variable is absent. An empty
    /// variable name skips the lookup entirely.
    fn resolve(&self, spec: &FieldSpec, overlay: &HashMap<String, String>) -> String {
        if spec.var.is_empty() {
            return spec.default.clone();
        }
        self.source
            .var(&spec.var)
            .or_else(|| overlay.get(&spec.var).cloned())
            .unwrap_or_else(|| spec.default.clone())
    }

    fn bind_field(&self, field: Field<'_>, overlay: &HashMap<String, String>) -> Result<()> {
        // Untagged fields are left at their current value.
        if field.tag.is_empty() {
            return Ok(());
        }

        let spec = FieldSpec::parse(field.tag);
        let raw = self.resolve(&spec, overlay);

        if spec.required && raw.is_empty() {
            return Err(Error::MissingRequired {
                field: field.name,
                var: spec.var,
            });
        }

        let value = match spec.transform {
            Some(transform) => transform.apply(&raw),
            None => raw,
        };

        match field.slot {
            FieldSlot::Text(slot) => *slot = value,
            FieldSlot::Int(slot) => {
                if !value.is_empty() {
                    *slot = value.parse().map_err(|_| Error::TypeCoercion {
                        field: field.name,
                        value,
                        kind: "integer",
                    })?;
                }
            }
            FieldSlot::Flag(slot) => {
                if !value.is_empty() {
                    *slot = parse_bool(&value).ok_or_else(|| Error::TypeCoercion {
                        field: field.name,
                        value,
                        kind: "boolean",
                    })?;
                }
            }
            FieldSlot::TextList(slot) => {
                *slot = coerce_list(&value, &spec);
            }
            FieldSlot::UnsupportedList => {
                return Err(Error::UnsupportedSliceType { field: field.name });
            }
            FieldSlot::Unsupported => {
                return Err(Error::UnsupportedFieldType { field: field.name });
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Binder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("env_file", &self.env_file)
            .finish_non_exhaustive()
    }
}

/// Split a transformed value into list elements.
///
/// When the transformed value is empty but the default literal is not, the
/// default literal is split instead — raw, with no transform and no port
/// stripping. That asymmetry is observable behavior and is kept as-is.
fn coerce_list(value: &str, spec: &FieldSpec) -> Vec<String> {
    let separator = spec.separator();

    if !value.is_empty() {
        let mut items: Vec<String> = value.split(separator).map(str::to_string).collect();
        if spec.transform == Some(Transform::HostsNoPorts) {
            for item in &mut items {
                if let Some(colon) = item.find(':') {
                    item.truncate(colon);
                }
            }
        }
        items
    } else if !spec.default.is_empty() {
        spec.default.split(separator).map(str::to_string).collect()
    } else {
        Vec::new()
    }
}

/// Boolean literal grammar: `true`/`false`/`t`/`f`/`1`/`0`, case-insensitive.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("t")
        || value == "1"
    {
        Some(true)
    } else if value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("f")
        || value == "0"
    {
        Some(false)
    } else {
        None
    }
}

/// Bind `record` from the process environment with the default binder.
///
/// Convenience for the common case; equivalent to
/// `Binder::new().bind(record)`.
///
/// # Errors
///
/// See [`Binder::bind`].
pub fn bind<T: BindTarget>(record: &mut T) -> Result<()> {
    Binder::new().bind(record)
}
