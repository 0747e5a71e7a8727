//! # envbind - Tag-Driven Environment Binding
//!
//! A declarative configuration-binding library: describe each field of a
//! settings struct with a small tag string, and let the engine populate the
//! struct from environment variables — defaults, required-ness checks,
//! type coercion, and named value transforms included.
//!
//! ## Features
//!
//! - **Binding tags**: `env:`, `default:`, `sep:`, `transform:`, `desc:`,
//!   `required` — order-insensitive, forward-compatible
//! - **Typed coercion**: strings, base-10 integers, booleans, and
//!   separator-split string lists
//! - **Transforms**: `url_escape` (form-urlencoded escaping) and
//!   `hosts_no_ports` (per-host port stripping for host lists)
//! - **Environments**: `production` / `staging` / `local` selected by
//!   `NODE_ENV`; in `local`, a `.env` file is loaded before binding
//! - **Standalone lookups**: one-off typed reads with fallbacks, outside
//!   the struct-binding flow
//! - **Derive macro**: `#[derive(BindTarget)]` generates the binding table
//!   from field attributes (requires the `derive` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envbind::{BindTarget, Binder, Field};
//!
//! #[derive(Default)]
//! struct Settings {
//!     hosts: Vec<String>,
//!     password: String,
//!     port: i64,
//! }
//!
//! impl BindTarget for Settings {
//!     fn fields(&mut self) -> Option<Vec<Field<'_>>> {
//!         Some(vec![
//!             Field::text_list(
//!                 "hosts",
//!                 "env:HOSTS,sep:',',transform:hosts_no_ports,required",
//!                 &mut self.hosts,
//!             ),
//!             Field::text("password", "env:PASS,transform:url_escape", &mut self.password),
//!             Field::int("port", "env:PORT,default:9042", &mut self.port),
//!         ])
//!     }
//! }
//!
//! let mut settings = Settings::default();
//! Binder::new().bind(&mut settings)?;
//! # Ok::<(), envbind::Error>(())
//! ```
//!
//! With the `derive` feature the table above collapses to:
//!
//! ```rust,ignore
//! use envbind::{Binder, DeriveBindTarget as BindTarget, Environment};
//!
//! #[derive(Default, BindTarget)]
//! struct Settings {
//!     #[bind("env:HOSTS,sep:',',transform:hosts_no_ports,required")]
//!     hosts: Vec<String>,
//!     #[bind("env:PASS,transform:url_escape")]
//!     password: String,
//!     #[bind("env:PORT,default:9042")]
//!     port: i64,
//!     #[bind(environment)]
//!     env: Environment,
//! }
//! ```
//!
//! ## Binding Semantics
//!
//! Fields bind in declaration order, failing fast on the first error.
//! Resolution reads the variable, then the `.env` overlay (local only),
//! then the `default:` literal; a variable explicitly set to the empty
//! string does not fall back. Empty values leave integer and boolean
//! fields at their prior value, while string fields are assigned verbatim.
//! Fields without a tag are never touched.
//!
//! Binding is intended to run once per process, at startup, before any
//! concurrent work begins. Errors are returned, never logged: surfacing
//! them is the caller's responsibility, and retrying without changing the
//! environment or the record definition is never useful.
//!
//! ## Testing Against a Fixed Environment
//!
//! ```rust
//! use envbind::{int_var, MapEnv};
//!
//! let env = MapEnv::new()
//!     .with("NODE_ENV", "staging")
//!     .with("TIMEOUT_MS", "2500");
//!
//! assert_eq!(int_var(&env, "TIMEOUT_MS", 1000), 2500);
//! ```

// Core modules
mod binder;
mod error;
mod lookup;
mod record;
mod source;
mod tag;
mod transform;

// Re-exports from core
pub use binder::{bind, Binder};
pub use error::{Error, Result};
pub use lookup::{bool_var, int_var, list_var};
pub use record::{
    BindTarget, EnvField, Environment, Field, FieldSlot, ENV_SELECTOR_VAR,
};
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use tag::{FieldSpec, DEFAULT_SEPARATOR};
pub use transform::Transform;

// Derive macro re-export (requires `derive` feature)
/// Derive macro for auto-generating [`BindTarget`] implementations.
///
/// Annotate fields with `#[bind("…tag…")]`, and at most one field with
/// `#[bind(environment)]` to receive the resolved environment name.
/// Fields without a `#[bind]` attribute are skipped untouched.
///
/// # Example
///
/// ```rust,ignore
/// use envbind::DeriveBindTarget;
///
/// #[derive(Default, DeriveBindTarget)]
/// struct Settings {
///     #[bind("env:DB_HOST,default:localhost")]
///     host: String,
/// }
/// ```
#[cfg(feature = "derive")]
pub use envbind_derive::BindTarget as DeriveBindTarget;
