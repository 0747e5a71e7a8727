//! Named value transforms
//!
//! The transform registry is the closed [`Transform`] enum: a static,
//! process-wide, immutable set of pure string rewrites selected by name
//! from a binding tag. There is no runtime registration.

/// A named transform applied to the resolved raw value before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Percent-encode the value with `application/x-www-form-urlencoded`
    /// rules (space becomes `+`), suitable for embedding inside a
    /// connection-string query or path segment.
    UrlEscape,
    /// Strip the `:port` suffix from each host of a host list.
    ///
    /// At the string level this is the identity: the actual port stripping
    /// happens per element during list coercion, after the value has been
    /// split on the separator. The name selects that post-split step
    /// rather than rewriting the joined string here.
    HostsNoPorts,
}

impl Transform {
    /// Resolve a transform by its tag name. Unknown names are `None`,
    /// which the engine treats as the identity transform.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "url_escape" => Some(Transform::UrlEscape),
            "hosts_no_ports" => Some(Transform::HostsNoPorts),
            _ => None,
        }
    }

    /// Tag name of this transform.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Transform::UrlEscape => "url_escape",
            Transform::HostsNoPorts => "hosts_no_ports",
        }
    }

    /// Apply the transform. Pure and total: no failure mode.
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        match self {
            Transform::UrlEscape => form_urlencoded::byte_serialize(value.as_bytes()).collect(),
            Transform::HostsNoPorts => value.to_string(),
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Transform::from_name("url_escape"), Some(Transform::UrlEscape));
        assert_eq!(
            Transform::from_name("hosts_no_ports"),
            Some(Transform::HostsNoPorts)
        );
        assert_eq!(Transform::from_name("unknown"), None);
        assert_eq!(Transform::from_name(""), None);
    }

    #[test]
    fn test_url_escape() {
        assert_eq!(
            Transform::UrlEscape.apply("p@ss w!th sp&cial"),
            "p%40ss+w%21th+sp%26cial"
        );
        assert_eq!(Transform::UrlEscape.apply("plain"), "plain");
        assert_eq!(Transform::UrlEscape.apply(""), "");
    }

    #[test]
    fn test_hosts_no_ports_is_string_identity() {
        // Port stripping happens during list coercion, not here.
        assert_eq!(
            Transform::HostsNoPorts.apply("host1:9042,host2:9042"),
            "host1:9042,host2:9042"
        );
    }

    #[test]
    fn test_name_round_trip() {
        for t in [Transform::UrlEscape, Transform::HostsNoPorts] {
            assert_eq!(Transform::from_name(t.name()), Some(t));
        }
    }
}
