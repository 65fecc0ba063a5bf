//! Canonical group-name derivation.
//!
//! A new group's full name is its lowercased simple name prefixed by the parent
//! group, or by the organizational unit when there is no parent group. The result
//! must descend from the project's root key.

const SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNameContext {
    pub simple_name: String,
    pub parent_group_value: Option<String>,
    pub organizational_unit_value: Option<String>,
    pub required_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    pub full_name: String,
    pub prefix_ok: bool,
}

pub fn derive(context: &GroupNameContext) -> DerivedName {
    let prefix = non_empty(context.parent_group_value.as_deref())
        .or_else(|| non_empty(context.organizational_unit_value.as_deref()));
    let simple = context.simple_name.to_lowercase();
    let full_name = match prefix {
        Some(prefix) if simple.is_empty() => prefix.to_string(),
        Some(prefix) => format!("{prefix}{SEPARATOR}{simple}"),
        None => simple,
    };
    let prefix_ok = descends_from(&full_name, &context.required_prefix);
    DerivedName {
        full_name,
        prefix_ok,
    }
}

/// `name` is the root key itself or one of its `-` separated descendants.
pub fn descends_from(name: &str, root: &str) -> bool {
    name == root
        || name
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(simple: &str, parent: &str, ou: &str, root: &str) -> GroupNameContext {
        GroupNameContext {
            simple_name: simple.to_string(),
            parent_group_value: Some(parent.to_string()),
            organizational_unit_value: Some(ou.to_string()),
            required_prefix: root.to_string(),
        }
    }

    #[test]
    fn parent_group_prefix_wins_over_ou() {
        let derived = derive(&context("Devs", "acme-eu", "acme-ou", "acme"));
        assert_eq!(derived.full_name, "acme-eu-devs");
        assert!(derived.prefix_ok);
    }

    #[test]
    fn ou_prefix_applies_without_parent_group() {
        let derived = derive(&context("x", "", "other", "acme"));
        assert_eq!(derived.full_name, "other-x");
        assert!(!derived.prefix_ok);
    }

    #[test]
    fn empty_simple_name_yields_prefix_alone() {
        let derived = derive(&context("", "acme", "", "acme"));
        assert_eq!(derived.full_name, "acme");
        assert!(derived.prefix_ok);
    }

    #[test]
    fn missing_prefixes_leave_the_lowercased_simple_name() {
        let derived = derive(&GroupNameContext {
            simple_name: "ACME".to_string(),
            parent_group_value: None,
            organizational_unit_value: None,
            required_prefix: "acme".to_string(),
        });
        assert_eq!(derived.full_name, "acme");
        assert!(derived.prefix_ok);
    }

    #[test]
    fn descent_requires_a_separator_after_the_root() {
        assert!(descends_from("acme", "acme"));
        assert!(descends_from("acme-eu", "acme"));
        assert!(!descends_from("acmeeu", "acme"));
        assert!(!descends_from("acm", "acme"));
        assert!(!descends_from("eu-acme", "acme"));
    }

    #[test]
    fn derivation_is_deterministic() {
        let input = context("Ops", "", "acme-fr", "acme");
        assert_eq!(derive(&input), derive(&input));
    }
}
