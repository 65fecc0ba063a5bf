//! Field rendering strategies keyed by field group kind and parameter id.

use crate::form::{FieldsetId, FormError, FormModel, InputHandle, Mount, ParameterDescriptor};
use crate::messages::MessageBundle;
use crate::shared::ids::{FieldGroupKind, ParameterId};
use crate::validation::ValidatorRegistry;
use std::collections::BTreeMap;
use std::rc::Rc;

pub mod group_create;
pub mod remote_select;
pub mod standard;

pub use group_create::GroupCreateStrategy;
pub use remote_select::RemoteSelectStrategy;
pub use standard::StandardStrategy;

/// What a strategy may touch while building a field.
pub struct RenderContext<'a> {
    pub form: &'a mut FormModel,
    pub validators: &'a mut ValidatorRegistry,
    pub messages: &'a dyn MessageBundle,
    pub standard: Rc<dyn RenderStrategy>,
}

pub trait RenderStrategy: std::fmt::Debug {
    /// Builds the field and returns the fieldset wrapping it, so callers can add
    /// sibling controls.
    fn render(
        &self,
        cx: &mut RenderContext<'_>,
        parameter: &ParameterDescriptor,
        mount: Mount,
        input: InputHandle,
    ) -> Result<FieldsetId, FormError>;
}

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    standard: Rc<dyn RenderStrategy>,
    overrides: BTreeMap<FieldGroupKind, BTreeMap<ParameterId, Rc<dyn RenderStrategy>>>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_standard(Rc::new(StandardStrategy))
    }
}

impl ProviderRegistry {
    pub fn with_standard(standard: Rc<dyn RenderStrategy>) -> Self {
        Self {
            standard,
            overrides: BTreeMap::new(),
        }
    }

    pub fn standard(&self) -> Rc<dyn RenderStrategy> {
        Rc::clone(&self.standard)
    }

    pub fn register(
        &mut self,
        kind: FieldGroupKind,
        id: ParameterId,
        strategy: Rc<dyn RenderStrategy>,
    ) {
        self.overrides.entry(kind).or_default().insert(id, strategy);
    }

    pub fn get(&self, kind: &FieldGroupKind, id: &str) -> Option<Rc<dyn RenderStrategy>> {
        self.overrides
            .get(kind)
            .and_then(|strategies| strategies.get(id))
            .map(Rc::clone)
    }

    /// The override registered for `id`, else the standard strategy.
    pub fn resolve(&self, kind: &FieldGroupKind, id: &str) -> Rc<dyn RenderStrategy> {
        self.get(kind, id).unwrap_or_else(|| self.standard())
    }

    pub fn has_override(&self, kind: &FieldGroupKind, id: &str) -> bool {
        self.get(kind, id).is_some()
    }
}

/// Label lookup shared by the built-in strategies.
pub(crate) fn label_for(messages: &dyn MessageBundle, id: &ParameterId) -> Option<String> {
    messages.message(id.as_str()).map(str::to_string)
}
