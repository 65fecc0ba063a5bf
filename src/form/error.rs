use crate::shared::ids::ParameterId;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("field `{0}` is not rendered in this form")]
    UnknownField(ParameterId),
    #[error("field `{0}` is already rendered in this form")]
    DuplicateField(ParameterId),
    #[error("fieldset #{0} does not exist")]
    UnknownFieldset(usize),
    #[error("container #{0} does not exist")]
    UnknownContainer(usize),
    #[error("field `{0}` does not accept a lookup selection")]
    NotASelect(ParameterId),
    #[error("field `{0}` is read-only")]
    ReadOnly(ParameterId),
    #[error("field `{0}` only accepts entries from its lookup")]
    UnlistedEntry(ParameterId),
}
