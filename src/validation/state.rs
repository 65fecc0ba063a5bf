use crate::form::Decoration;
use crate::shared::ids::ParameterId;
use std::collections::BTreeMap;

/// Rules surfaced to the UI layer; `message_key` is what the message bundle resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    OuNotExists,
    StartsWith,
    AlreadyExist,
    ValidationUnavailable,
}

impl ValidationRule {
    pub fn message_key(self) -> &'static str {
        match self {
            Self::OuNotExists => "service:id:ou-not-exists",
            Self::StartsWith => "StartsWith",
            Self::AlreadyExist => "already-exist",
            Self::ValidationUnavailable => "validation-unavailable",
        }
    }
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Idle,
    Pending,
    Success,
    Warning(ValidationRule),
    Error {
        rule: ValidationRule,
        parameters: Vec<String>,
    },
}

impl ValidationState {
    pub fn error(rule: ValidationRule, parameters: Vec<String>) -> Self {
        Self::Error { rule, parameters }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn decoration(&self) -> Option<Decoration> {
        match self {
            Self::Idle => None,
            Self::Pending => Some(Decoration::Checking),
            Self::Success => Some(Decoration::Success),
            Self::Warning(_) => Some(Decoration::Warning),
            Self::Error { .. } => Some(Decoration::Error),
        }
    }
}

/// Live validators a field can carry in create mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    OuCreateMode,
    GroupCreateMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorRegistry {
    validators: BTreeMap<ParameterId, Validator>,
}

impl ValidatorRegistry {
    pub fn install(&mut self, id: ParameterId, validator: Validator) {
        self.validators.insert(id, validator);
    }

    pub fn get(&self, id: &str) -> Option<Validator> {
        self.validators.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
