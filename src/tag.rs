//! Binding tag parser
//!
//! A binding tag is a comma-separated list of directives describing how one
//! field is populated:
//!
//! ```text
//! env:CASSANDRA_HOSTS,sep:',',transform:hosts_no_ports,required,desc:cluster contact points
//! ```
//!
//! Recognized directives are `env:`, `default:`, `sep:`, `transform:`,
//! `desc:` and the bare token `required`. Anything else is silently ignored
//! so that tags stay forward-compatible. When the same directive appears
//! twice, the last occurrence wins.

use crate::transform::Transform;

/// Default separator for list fields when `sep:` is not given.
pub const DEFAULT_SEPARATOR: &str = ",";

// Directive prefixes of the tag grammar
const TAG_ENV: &str = "env:";
const TAG_DEFAULT: &str = "default:";
const TAG_SEP: &str = "sep:";
const TAG_TRANSFORM: &str = "transform:";
const TAG_DESC: &str = "desc:";
const TAG_REQUIRED: &str = "required";

/// Parsed form of one field's binding tag.
///
/// A `FieldSpec` is derived, not stored: the engine re-parses the tag on
/// every bind call. Binding happens at most once per process, so the cost
/// of reparsing is irrelevant and there is no cache to invalidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec {
    /// Environment variable to read; empty means "default only".
    pub var: String,
    /// Fallback raw value used when the variable is not set.
    pub default: String,
    /// Whether an empty resolved value is an error.
    pub required: bool,
    /// Named value transform applied before coercion, if any.
    pub transform: Option<Transform>,
    /// Separator for list fields; empty means unset.
    pub separator: String,
    /// Free-text documentation. No runtime effect.
    pub description: String,
}

impl FieldSpec {
    /// Parse a binding tag.
    ///
    /// Parsing is total: unrecognized directives are ignored and malformed
    /// values are carried through as-is, to be rejected (or not) during
    /// coercion.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let mut spec = FieldSpec::default();

        for part in tag.split(',') {
            let part = part.trim();
            if let Some(var) = part.strip_prefix(TAG_ENV) {
                spec.var = var.to_string();
            } else if let Some(default) = part.strip_prefix(TAG_DEFAULT) {
                spec.default = default.to_string();
            } else if let Some(sep) = part.strip_prefix(TAG_SEP) {
                spec.separator = strip_quotes(sep).to_string();
            } else if let Some(name) = part.strip_prefix(TAG_TRANSFORM) {
                // Unknown transform names mean identity, not an error.
                spec.transform = Transform::from_name(name);
            } else if let Some(desc) = part.strip_prefix(TAG_DESC) {
                spec.description = desc.to_string();
            } else if part == TAG_REQUIRED {
                spec.required = true;
            }
        }

        spec
    }

    /// Effective separator for list fields (`,` when unset).
    #[must_use]
    pub fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }
}

/// Strip a matching pair of single quotes around a `sep:` value.
///
/// Invariant kept from the original grammar: the tag itself splits on `,`,
/// so a quoted comma separator `sep:','` arrives here as the lone quote
/// `'`. That lone quote is both prefix and suffix, strips to the empty
/// string, and the empty separator then falls back to the comma default —
/// which is exactly the separator the author asked for.
fn strip_quotes(value: &str) -> &str {
    if value.starts_with('\'') && value.ends_with('\'') {
        value.trim_matches('\'')
    } else {
        value
    }
}
