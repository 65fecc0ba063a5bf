use super::state::{ValidationRule, ValidationState, Validator};
use crate::directory::{QueryCompletion, QueryDispatcher, QueryTicket};
use crate::form::parameter::{group_id, ou_id, GROUP, GROUP_SIMPLE_NAME, OU, PARENT_GROUP};
use crate::form::{FormError, FormModel};
use crate::naming::{derive, GroupNameContext};
use crate::shared::ids::ParameterId;
use crate::shared::logging::EventLog;
use serde_json::Value;
use std::collections::BTreeMap;

static IDLE: ValidationState = ValidationState::Idle;

/// Fields blocking submission and fields still waiting on the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readiness {
    pub blocking: Vec<ParameterId>,
    pub pending: Vec<ParameterId>,
}

impl Readiness {
    /// Pending checks do not block: the synchronous answer of a check in flight is
    /// "no error seen yet".
    pub fn is_submittable(&self) -> bool {
        self.blocking.is_empty()
    }
}

/// Owns per-field validation state. Existence answers are applied only when they
/// belong to the latest query issued for their field.
#[derive(Debug)]
pub struct ValidationController {
    required_prefix: String,
    states: BTreeMap<ParameterId, ValidationState>,
    latest: BTreeMap<ParameterId, QueryTicket>,
    next_seq: u64,
    log: EventLog,
}

impl ValidationController {
    pub fn new(required_prefix: impl Into<String>, log: EventLog) -> Self {
        Self {
            required_prefix: required_prefix.into(),
            states: BTreeMap::new(),
            latest: BTreeMap::new(),
            next_seq: 1,
            log,
        }
    }

    pub fn required_prefix(&self) -> &str {
        &self.required_prefix
    }

    pub fn state(&self, id: &str) -> &ValidationState {
        self.states.get(id).unwrap_or(&IDLE)
    }

    /// The query whose answer is still awaited for `id`.
    pub fn authoritative_query(&self, id: &str) -> Option<&QueryTicket> {
        self.latest.get(id)
    }

    pub fn run(
        &mut self,
        validator: Validator,
        form: &mut FormModel,
        dispatcher: &mut dyn QueryDispatcher,
    ) -> Result<bool, FormError> {
        match validator {
            Validator::OuCreateMode => self.validate_ou_create_mode(form, dispatcher),
            Validator::GroupCreateMode => self.validate_group_create_mode(form, dispatcher),
        }
    }

    pub fn validate_ou_create_mode(
        &mut self,
        form: &mut FormModel,
        dispatcher: &mut dyn QueryDispatcher,
    ) -> Result<bool, FormError> {
        let ou = ou_id();
        self.transition(form, &ou, ValidationState::Idle)?;
        let next = match form.selection(OU) {
            Some(selection) if selection.is_new => {
                Some(ValidationState::Warning(ValidationRule::OuNotExists))
            }
            Some(_) => Some(ValidationState::Success),
            None => None,
        };
        if let Some(next) = next {
            self.transition(form, &ou, next)?;
        }

        // The OU is one of the group name's prefix sources.
        self.validate_group_create_mode(form, dispatcher)
    }

    /// Returns `false` only for a synchronously detectable error. A `true` result
    /// may still turn into an error once the existence query answers.
    pub fn validate_group_create_mode(
        &mut self,
        form: &mut FormModel,
        dispatcher: &mut dyn QueryDispatcher,
    ) -> Result<bool, FormError> {
        let group = group_id();
        self.latest.remove(GROUP);
        self.transition(form, &group, ValidationState::Idle)?;

        let derived = derive(&self.context(form));
        form.display_computed(GROUP, derived.full_name.clone())?;

        if !derived.prefix_ok {
            self.log.debug(
                "prefix_rejected",
                "derived group name does not descend from the required prefix",
                &[
                    ("full_name", Value::String(derived.full_name.clone())),
                    ("required_prefix", Value::String(self.required_prefix.clone())),
                ],
            );
            let state = ValidationState::error(
                ValidationRule::StartsWith,
                vec![self.required_prefix.clone()],
            );
            self.transition(form, &group, state)?;
            return Ok(false);
        }

        self.transition(form, &group, ValidationState::Pending)?;
        let ticket = QueryTicket {
            seq: self.next_seq,
            field: group.clone(),
            full_name: derived.full_name,
        };
        self.next_seq += 1;
        self.log.debug(
            "query_issued",
            "checking group existence",
            &[
                ("seq", Value::from(ticket.seq)),
                ("full_name", Value::String(ticket.full_name.clone())),
            ],
        );
        self.latest.insert(group, ticket.clone());
        dispatcher.dispatch(ticket);
        Ok(true)
    }

    /// Applies an existence answer. Returns `false` when it was stale and dropped.
    pub fn complete(
        &mut self,
        form: &mut FormModel,
        completion: QueryCompletion,
    ) -> Result<bool, FormError> {
        let QueryCompletion { ticket, outcome } = completion;
        let current = self.latest.get(ticket.field.as_str()).is_some_and(|latest| {
            latest.seq == ticket.seq && form.value(ticket.field.as_str()) == ticket.full_name
        });
        if !current {
            self.log.debug(
                "query_discarded",
                "existence answer superseded by a newer input",
                &[
                    ("seq", Value::from(ticket.seq)),
                    ("full_name", Value::String(ticket.full_name.clone())),
                ],
            );
            return Ok(false);
        }
        self.latest.remove(ticket.field.as_str());

        let next = match outcome {
            Ok(true) => ValidationState::error(
                ValidationRule::AlreadyExist,
                vec![ticket.field.to_string(), ticket.full_name.clone()],
            ),
            Ok(false) => ValidationState::Success,
            Err(err) => {
                self.log.warn(
                    "query_failed",
                    &err.to_string(),
                    &[("seq", Value::from(ticket.seq))],
                );
                ValidationState::error(
                    ValidationRule::ValidationUnavailable,
                    vec![ticket.full_name.clone()],
                )
            }
        };
        self.log.info(
            "query_applied",
            "existence answer applied",
            &[
                ("seq", Value::from(ticket.seq)),
                ("full_name", Value::String(ticket.full_name.clone())),
                ("error", Value::Bool(next.is_error())),
            ],
        );
        self.transition(form, &ticket.field, next)?;
        Ok(true)
    }

    pub fn readiness(&self) -> Readiness {
        let mut readiness = Readiness::default();
        for (id, state) in &self.states {
            if state.is_error() {
                readiness.blocking.push(id.clone());
            } else if state.is_pending() {
                readiness.pending.push(id.clone());
            }
        }
        readiness
    }

    fn context(&self, form: &FormModel) -> GroupNameContext {
        GroupNameContext {
            simple_name: form.value(GROUP_SIMPLE_NAME).to_string(),
            parent_group_value: Some(form.value(PARENT_GROUP).to_string()),
            organizational_unit_value: Some(form.value(OU).to_string()),
            required_prefix: self.required_prefix.clone(),
        }
    }

    fn transition(
        &mut self,
        form: &mut FormModel,
        id: &ParameterId,
        next: ValidationState,
    ) -> Result<(), FormError> {
        if form.field(id.as_str()).is_some() {
            form.decorate(id.as_str(), next.decoration())?;
        }
        self.states.insert(id.clone(), next);
        Ok(())
    }
}
