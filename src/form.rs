//! Headless form model: fieldsets, inputs and their display attributes.

pub mod error;
pub mod model;
pub mod parameter;

pub use error::FormError;
pub use model::{
    ContainerId, ControlKind, Decoration, FieldElement, Fieldset, FieldsetId, FormModel,
    InputHandle, LookupSelection, Mount, RemoteSelectSpec,
};
pub use parameter::{LayoutPosition, ParameterDescriptor};
