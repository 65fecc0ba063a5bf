use super::{RenderContext, RenderStrategy};
use crate::form::{
    ControlKind, FieldsetId, FormError, InputHandle, Mount, ParameterDescriptor, RemoteSelectSpec,
};
use std::rc::Rc;

/// Swaps the input for a lookup against existing directory entries, then lays it
/// out like any standard field.
#[derive(Debug, Clone)]
pub struct RemoteSelectStrategy {
    spec: RemoteSelectSpec,
}

impl RemoteSelectStrategy {
    pub fn new(spec: RemoteSelectSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &RemoteSelectSpec {
        &self.spec
    }
}

impl RenderStrategy for RemoteSelectStrategy {
    fn render(
        &self,
        cx: &mut RenderContext<'_>,
        parameter: &ParameterDescriptor,
        mount: Mount,
        input: InputHandle,
    ) -> Result<FieldsetId, FormError> {
        let input = InputHandle {
            control: ControlKind::RemoteSelect(self.spec.clone()),
            ..input
        };
        let standard = Rc::clone(&cx.standard);
        standard.render(cx, parameter, mount, input)
    }
}
