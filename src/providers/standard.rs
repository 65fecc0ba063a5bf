use super::{label_for, RenderContext, RenderStrategy};
use crate::form::{FieldsetId, FormError, InputHandle, Mount, ParameterDescriptor};

/// Plain input with its label, description and required flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStrategy;

impl RenderStrategy for StandardStrategy {
    fn render(
        &self,
        cx: &mut RenderContext<'_>,
        parameter: &ParameterDescriptor,
        mount: Mount,
        input: InputHandle,
    ) -> Result<FieldsetId, FormError> {
        let label = label_for(cx.messages, &parameter.id);
        cx.form.attach(mount, parameter, input, label)
    }
}
