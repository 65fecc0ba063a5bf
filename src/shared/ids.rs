use crate::shared::serde_ext::parse_via_string;
use serde::{Deserialize, Deserializer, Serialize};

/// Parameter ids are namespaced with `:` (`service:id:ldap:url`).
pub fn validate_parameter_id_value(kind: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{kind} must be non-empty"));
    }
    if value.starts_with(':') || value.ends_with(':') || value.contains("::") {
        return Err(format!("{kind} must not contain empty `:` segments"));
    }
    if value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':')
    {
        return Ok(());
    }
    Err(format!(
        "{kind} must use only ASCII letters, digits, '-', '_' or ':'"
    ))
}

macro_rules! define_id_type {
    ($name:ident, $kind:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: &str) -> Result<Self, String> {
                validate_parameter_id_value($kind, raw)?;
                Ok(Self(raw.to_string()))
            }

            /// For compile-time literals that are known to be valid.
            pub(crate) fn from_static(raw: &'static str) -> Self {
                debug_assert!(validate_parameter_id_value($kind, raw).is_ok());
                Self(raw.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                parse_via_string(deserializer, $kind, Self::parse)
            }
        }
    };
}

define_id_type!(ParameterId, "parameter id");
define_id_type!(FieldGroupKind, "field group kind");

impl FieldGroupKind {
    /// The bootstrap-style `form-group` wrapper every directory parameter uses.
    pub fn form_group() -> Self {
        Self::from_static("form-group")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_ids_accept_namespaced_segments() {
        assert_eq!(
            ParameterId::parse("service:id:ldap:people-dn")
                .expect("id")
                .as_str(),
            "service:id:ldap:people-dn"
        );
        assert!(ParameterId::parse("").is_err());
        assert!(ParameterId::parse("service::id").is_err());
        assert!(ParameterId::parse(":service").is_err());
        assert!(ParameterId::parse("service id").is_err());
    }

    #[test]
    fn parameter_ids_deserialize_through_validation() {
        let id: ParameterId = serde_yaml::from_str("service:id:ou").expect("yaml id");
        assert_eq!(id.as_str(), "service:id:ou");
        let err = serde_yaml::from_str::<ParameterId>("'bad id'").expect_err("invalid id");
        assert!(err.to_string().contains("invalid parameter id `bad id`"));
    }
}
