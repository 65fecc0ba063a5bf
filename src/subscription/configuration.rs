use crate::providers::ProviderRegistry;
use crate::shared::ids::ParameterId;
use crate::validation::ValidatorRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Link,
    Update,
}

impl FormMode {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "link" => Ok(Self::Link),
            "update" => Ok(Self::Update),
            _ => Err("mode must be one of: create, link, update".to_string()),
        }
    }
}

/// Whether the form edits the shared node or one subscription of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Node,
    Instance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiContext {
    pub scope: Scope,
    /// Root key every group created for the project must descend from.
    pub project_pkey: String,
}

impl UiContext {
    pub fn node() -> Self {
        Self {
            scope: Scope::Node,
            project_pkey: String::new(),
        }
    }

    pub fn instance(project_pkey: impl Into<String>) -> Self {
        Self {
            scope: Scope::Instance,
            project_pkey: project_pkey.into(),
        }
    }

    pub fn is_node_mode(&self) -> bool {
        self.scope == Scope::Node
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    pub mode: FormMode,
    pub providers: ProviderRegistry,
    pub validators: ValidatorRegistry,
}

impl Configuration {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            providers: ProviderRegistry::default(),
            validators: ValidatorRegistry::default(),
        }
    }

    /// New directory objects can only be requested for one subscription at a time.
    pub fn creates_objects(&self, ui: &UiContext) -> bool {
        self.mode == FormMode::Create && !ui.is_node_mode()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subscription {
    pub id: u64,
    #[serde(default)]
    pub parameters: BTreeMap<ParameterId, String>,
}

impl Subscription {
    pub fn parameter(&self, id: &str) -> Option<&str> {
        self.parameters.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_instance_create_forms_create_objects() {
        let instance = UiContext::instance("acme");
        assert!(Configuration::new(FormMode::Create).creates_objects(&instance));
        assert!(!Configuration::new(FormMode::Link).creates_objects(&instance));
        assert!(!Configuration::new(FormMode::Update).creates_objects(&instance));
        assert!(!Configuration::new(FormMode::Create).creates_objects(&UiContext::node()));
    }

    #[test]
    fn form_mode_parse_is_case_insensitive() {
        assert_eq!(FormMode::parse(" Create "), Ok(FormMode::Create));
        assert_eq!(FormMode::parse("link"), Ok(FormMode::Link));
        assert!(FormMode::parse("delete").is_err());
    }
}
