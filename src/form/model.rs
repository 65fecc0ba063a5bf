use super::{FormError, LayoutPosition, ParameterDescriptor};
use crate::shared::ids::ParameterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldsetId(usize);

/// Where a strategy places the field it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// A new fieldset at the end of the container.
    Container(ContainerId),
    /// An existing fieldset, next to the controls it already holds.
    Fieldset(FieldsetId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSelectSpec {
    pub lookup_endpoint: String,
    pub query_template: Option<String>,
    pub allow_create_new: bool,
}

impl RemoteSelectSpec {
    /// Lookup URL for a search term, relative to the REST base.
    pub fn search_url(&self, rest_base: &str, term: &str) -> String {
        let encoded = urlencoding::encode(term);
        match self.query_template.as_deref() {
            Some(template) => {
                format!("{rest_base}{}{template}{encoded}", self.lookup_endpoint)
            }
            None => format!("{rest_base}{}{encoded}", self.lookup_endpoint),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    RemoteSelect(RemoteSelectSpec),
}

/// Entry picked in a remote select. `is_new` marks an entry the directory does not
/// hold yet and that will be created with the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupSelection {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "new")]
    pub is_new: bool,
}

impl LookupSelection {
    pub fn existing(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            text: id.clone(),
            id,
            is_new: false,
        }
    }

    pub fn created(id: impl Into<String>) -> Self {
        Self {
            is_new: true,
            ..Self::existing(id)
        }
    }
}

/// Inline feedback shown next to a fieldset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Checking,
    Success,
    Warning,
    Error,
}

/// An input that is built but not yet attached to a fieldset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandle {
    pub id: ParameterId,
    pub control: ControlKind,
}

impl InputHandle {
    pub fn text(id: ParameterId) -> Self {
        Self {
            id,
            control: ControlKind::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    pub id: ParameterId,
    pub control: ControlKind,
    pub value: String,
    pub selection: Option<LookupSelection>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    pub readonly: bool,
    pub disabled: bool,
    pub layout: LayoutPosition,
    pub fieldset: FieldsetId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fieldset {
    pub id: FieldsetId,
    pub container: ContainerId,
    pub fields: Vec<ParameterId>,
    pub required: bool,
    pub has_feedback: bool,
    pub decoration: Option<Decoration>,
}

#[derive(Debug, Clone, Default)]
pub struct FormModel {
    containers: Vec<Vec<FieldsetId>>,
    fieldsets: Vec<Fieldset>,
    fields: BTreeMap<ParameterId, FieldElement>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_container(&mut self) -> ContainerId {
        self.containers.push(Vec::new());
        ContainerId(self.containers.len() - 1)
    }

    /// Attaches `input` as described by `parameter` and returns its fieldset.
    pub fn attach(
        &mut self,
        mount: Mount,
        parameter: &ParameterDescriptor,
        input: InputHandle,
        label: Option<String>,
    ) -> Result<FieldsetId, FormError> {
        if self.fields.contains_key(input.id.as_str()) {
            return Err(FormError::DuplicateField(input.id));
        }
        let fieldset = match mount {
            Mount::Container(container) => {
                let slot = self
                    .containers
                    .get_mut(container.0)
                    .ok_or(FormError::UnknownContainer(container.0))?;
                let id = FieldsetId(self.fieldsets.len());
                slot.push(id);
                self.fieldsets.push(Fieldset {
                    id,
                    container,
                    fields: Vec::new(),
                    required: parameter.mandatory,
                    has_feedback: false,
                    decoration: None,
                });
                id
            }
            Mount::Fieldset(id) => {
                if id.0 >= self.fieldsets.len() {
                    return Err(FormError::UnknownFieldset(id.0));
                }
                id
            }
        };

        let set = &mut self.fieldsets[fieldset.0];
        match parameter.layout {
            LayoutPosition::Prepend => set.fields.insert(0, input.id.clone()),
            LayoutPosition::Append | LayoutPosition::Default => set.fields.push(input.id.clone()),
        }

        self.fields.insert(
            input.id.clone(),
            FieldElement {
                id: input.id,
                control: input.control,
                value: String::new(),
                selection: None,
                label,
                description: parameter.description.clone(),
                placeholder: None,
                required: parameter.mandatory,
                readonly: false,
                disabled: false,
                layout: parameter.layout,
                fieldset,
            },
        );
        Ok(fieldset)
    }

    pub fn field(&self, id: &str) -> Option<&FieldElement> {
        self.fields.get(id)
    }

    pub fn field_mut(&mut self, id: &str) -> Result<&mut FieldElement, FormError> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| FormError::UnknownField(unknown_id(id)))
    }

    pub fn fieldset(&self, id: FieldsetId) -> Option<&Fieldset> {
        self.fieldsets.get(id.0)
    }

    pub fn fieldset_mut(&mut self, id: FieldsetId) -> Result<&mut Fieldset, FormError> {
        self.fieldsets
            .get_mut(id.0)
            .ok_or(FormError::UnknownFieldset(id.0))
    }

    pub fn fieldset_of(&self, id: &str) -> Option<&Fieldset> {
        self.field(id).and_then(|field| self.fieldset(field.fieldset))
    }

    pub fn container_fieldsets(&self, id: ContainerId) -> &[FieldsetId] {
        self.containers.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current value of a field; absent fields read as empty, like an empty input.
    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|field| field.value.as_str()).unwrap_or("")
    }

    pub fn selection(&self, id: &str) -> Option<&LookupSelection> {
        self.field(id).and_then(|field| field.selection.as_ref())
    }

    /// Typed input. In a remote select the typed text replaces the picked entry:
    /// empty clears it, and any other text becomes a new entry when the lookup
    /// allows creation.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self.editable_field(id)?;
        let value = value.into();
        if let ControlKind::RemoteSelect(spec) = &field.control {
            let unchanged = field
                .selection
                .as_ref()
                .is_some_and(|entry| entry.id == value);
            if !unchanged {
                field.selection = if value.is_empty() {
                    None
                } else if spec.allow_create_new {
                    Some(LookupSelection::created(value.clone()))
                } else {
                    return Err(FormError::UnlistedEntry(field.id.clone()));
                };
            }
        }
        field.value = value;
        Ok(())
    }

    /// Picks an entry in a remote select; `None` clears it.
    pub fn select(
        &mut self,
        id: &str,
        selection: Option<LookupSelection>,
    ) -> Result<(), FormError> {
        let field = self.editable_field(id)?;
        if !matches!(field.control, ControlKind::RemoteSelect(_)) {
            return Err(FormError::NotASelect(field.id.clone()));
        }
        field.value = selection
            .as_ref()
            .map(|entry| entry.id.clone())
            .unwrap_or_default();
        field.selection = selection;
        Ok(())
    }

    fn editable_field(&mut self, id: &str) -> Result<&mut FieldElement, FormError> {
        let field = self.field_mut(id)?;
        if field.readonly || field.disabled {
            return Err(FormError::ReadOnly(field.id.clone()));
        }
        Ok(field)
    }

    /// Replaces the value shown in a field, read-only or not, and drops its fieldset's inline feedback.
    pub fn display_computed(
        &mut self,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = self.field_mut(id)?;
        field.value = value.into();
        let fieldset = field.fieldset;
        let set = self.fieldset_mut(fieldset)?;
        set.decoration = None;
        set.has_feedback = true;
        Ok(())
    }

    pub fn decorate(&mut self, id: &str, decoration: Option<Decoration>) -> Result<(), FormError> {
        let fieldset = self.field_mut(id)?.fieldset;
        self.fieldset_mut(fieldset)?.decoration = decoration;
        Ok(())
    }
}

fn unknown_id(raw: &str) -> ParameterId {
    ParameterId::parse(raw).unwrap_or_else(|_| ParameterId::from_static("unknown"))
}
