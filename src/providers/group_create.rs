use super::{RenderContext, RenderStrategy};
use crate::form::parameter::group_simple_name_id;
use crate::form::{FieldsetId, FormError, InputHandle, LayoutPosition, Mount, ParameterDescriptor};
use crate::validation::Validator;
use std::rc::Rc;

const GROUP_CREATE_PLACEHOLDER: &str = "service:id:ldap:group-create";

/// Create-mode rendering of the group field: the full name is computed, so the
/// primary input is locked and a mandatory simple-name input is added beside it.
#[derive(Debug, Clone)]
pub struct GroupCreateStrategy {
    previous: Rc<dyn RenderStrategy>,
}

impl GroupCreateStrategy {
    pub fn new(previous: Rc<dyn RenderStrategy>) -> Self {
        Self { previous }
    }
}

impl RenderStrategy for GroupCreateStrategy {
    fn render(
        &self,
        cx: &mut RenderContext<'_>,
        parameter: &ParameterDescriptor,
        mount: Mount,
        input: InputHandle,
    ) -> Result<FieldsetId, FormError> {
        let simple_id = group_simple_name_id();
        cx.validators.install(simple_id.clone(), Validator::GroupCreateMode);

        let primary_id = input.id.clone();
        let fieldset = self.previous.render(cx, &parameter.computed(), mount, input)?;

        let placeholder = cx.messages.message(GROUP_CREATE_PLACEHOLDER).map(str::to_string);
        let primary = cx.form.field_mut(primary_id.as_str())?;
        primary.readonly = true;
        primary.disabled = true;
        primary.required = false;
        primary.placeholder = placeholder;
        cx.form.fieldset_mut(fieldset)?.required = false;

        let simple = ParameterDescriptor::new(simple_id.clone())
            .mandatory()
            .with_layout(LayoutPosition::Prepend);
        let standard = Rc::clone(&cx.standard);
        standard.render(cx, &simple, Mount::Fieldset(fieldset), InputHandle::text(simple_id))?;
        Ok(fieldset)
    }
}
