use crate::shared::ids::ParameterId;
use serde::{Deserialize, Serialize};

pub const OU: &str = "service:id:ou";
pub const PARENT_GROUP: &str = "service:id:parent-group";
pub const GROUP: &str = "service:id:group";
pub const GROUP_SIMPLE_NAME: &str = "service:id:group-simple-name";

pub fn ou_id() -> ParameterId {
    ParameterId::from_static(OU)
}

pub fn parent_group_id() -> ParameterId {
    ParameterId::from_static(PARENT_GROUP)
}

pub fn group_id() -> ParameterId {
    ParameterId::from_static(GROUP)
}

pub fn group_simple_name_id() -> ParameterId {
    ParameterId::from_static(GROUP_SIMPLE_NAME)
}

/// Where an input sits relative to its fieldset's existing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPosition {
    Prepend,
    Append,
    #[default]
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterDescriptor {
    pub id: ParameterId,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default)]
    pub layout: LayoutPosition,
    #[serde(default)]
    pub description: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(id: ParameterId) -> Self {
        Self {
            id,
            mandatory: false,
            layout: LayoutPosition::Default,
            description: None,
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn with_layout(mut self, layout: LayoutPosition) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Copy used for a value computed from other inputs; its description is owned
    /// by whatever computes it.
    pub fn computed(&self) -> Self {
        Self {
            description: None,
            ..self.clone()
        }
    }
}
