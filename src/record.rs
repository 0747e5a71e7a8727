//! Bindable record model
//!
//! Rust has no runtime reflection, so the engine works against a
//! declarative binding table instead of inspecting the record: a
//! [`BindTarget`] exposes its annotated fields, in declaration order, as
//! [`Field`] entries pairing the raw binding tag with a mutable typed slot.
//!
//! Implement the trait by hand, or derive it with `#[derive(BindTarget)]`
//! from the `envbind-derive` crate (feature `derive`).

use std::str::FromStr;

/// Environment variable selecting the active deployment environment.
pub const ENV_SELECTOR_VAR: &str = "NODE_ENV";

/// Mutable typed slot for one record field.
///
/// The variants are the declared target kinds the engine can coerce into.
/// `UnsupportedList` and `Unsupported` represent fields whose declared type
/// falls outside the coercion rules; binding them fails with
/// [`UnsupportedSliceType`](crate::Error::UnsupportedSliceType) and
/// [`UnsupportedFieldType`](crate::Error::UnsupportedFieldType)
/// respectively, leaving the field untouched.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// A string field; assigned verbatim, possibly empty.
    Text(&'a mut String),
    /// A base-10 signed integer field; an empty value leaves it unchanged.
    Int(&'a mut i64),
    /// A boolean field; an empty value leaves it unchanged.
    Flag(&'a mut bool),
    /// A list-of-strings field, split on the tag's separator.
    TextList(&'a mut Vec<String>),
    /// A declared list whose element type is not `String`.
    UnsupportedList,
    /// Any other declared type.
    Unsupported,
}

/// One entry of a record's binding table.
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name, used in error reporting.
    pub name: &'static str,
    /// Raw binding tag; empty means the field is skipped untouched.
    pub tag: &'static str,
    /// Where the coerced value is written.
    pub slot: FieldSlot<'a>,
}

impl<'a> Field<'a> {
    /// Create a binding table entry.
    #[must_use]
    pub fn new(name: &'static str, tag: &'static str, slot: FieldSlot<'a>) -> Self {
        Self { name, tag, slot }
    }

    /// Entry for a string field.
    #[must_use]
    pub fn text(name: &'static str, tag: &'static str, slot: &'a mut String) -> Self {
        Self::new(name, tag, FieldSlot::Text(slot))
    }

    /// Entry for an integer field.
    #[must_use]
    pub fn int(name: &'static str, tag: &'static str, slot: &'a mut i64) -> Self {
        Self::new(name, tag, FieldSlot::Int(slot))
    }

    /// Entry for a boolean field.
    #[must_use]
    pub fn flag(name: &'static str, tag: &'static str, slot: &'a mut bool) -> Self {
        Self::new(name, tag, FieldSlot::Flag(slot))
    }

    /// Entry for a list-of-strings field.
    #[must_use]
    pub fn text_list(name: &'static str, tag: &'static str, slot: &'a mut Vec<String>) -> Self {
        Self::new(name, tag, FieldSlot::TextList(slot))
    }
}

/// Slot receiving the resolved deployment environment name, set after the
/// per-field loop completes.
#[derive(Debug)]
pub enum EnvField<'a> {
    /// A plain string field; receives the raw selector value verbatim.
    Name(&'a mut String),
    /// A typed field; unknown names fall back to [`Environment::Local`].
    Typed(&'a mut Environment),
}

/// A record the engine can populate.
///
/// # Example
/// ```rust
/// use envbind::{BindTarget, EnvField, Field};
///
/// #[derive(Default)]
/// struct DbConfig {
///     host: String,
///     port: i64,
/// }
///
/// impl BindTarget for DbConfig {
///     fn fields(&mut self) -> Option<Vec<Field<'_>>> {
///         Some(vec![
///             Field::text("host", "env:DB_HOST,default:localhost", &mut self.host),
///             Field::int("port", "env:DB_PORT,default:5432", &mut self.port),
///         ])
///     }
/// }
/// ```
pub trait BindTarget {
    /// The record's binding table, in field-declaration order.
    ///
    /// `None` means the value is not a bindable record; the engine fails
    /// with [`NotBindable`](crate::Error::NotBindable) before touching any
    /// field. Derived implementations always return `Some`.
    fn fields(&mut self) -> Option<Vec<Field<'_>>>;

    /// Slot for the resolved environment name, if the record declares one.
    fn environment_field(&mut self) -> Option<EnvField<'_>> {
        None
    }
}

/// Deployment environment selected by [`ENV_SELECTOR_VAR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Deployed production environment.
    Production,
    /// Pre-production staging environment.
    Staging,
    /// Local development; triggers the `.env` bootstrap.
    #[default]
    Local,
}

impl Environment {
    /// Canonical name of the environment.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Local => "local",
        }
    }

    /// Resolve an environment from its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "production" => Some(Environment::Production),
            "staging" => Some(Environment::Staging),
            "local" => Some(Environment::Local),
            _ => None,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::from_name(s).ok_or(())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::from_name("production"), Some(Environment::Production));
        assert_eq!(Environment::from_name("staging"), Some(Environment::Staging));
        assert_eq!(Environment::from_name("local"), Some(Environment::Local));
        assert_eq!(Environment::from_name("dev"), None);
        assert_eq!(Environment::from_name("Production"), None);
    }

    #[test]
    fn test_environment_default_is_local() {
        assert_eq!(Environment::default(), Environment::Local);
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!("local".parse(), Ok(Environment::Local));
        assert_eq!("prod".parse::<Environment>(), Err(()));
    }
}
