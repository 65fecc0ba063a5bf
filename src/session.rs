//! One form session: configuration, rendered fields, validation and the
//! dispatcher carrying existence queries.

use crate::config::Settings;
use crate::directory::{HttpExistenceOracle, QueryDispatcher, ThreadedDispatcher};
use crate::form::{
    ContainerId, FormError, FormModel, InputHandle, LookupSelection, Mount, ParameterDescriptor,
};
use crate::messages::{DefaultMessages, MessageBundle};
use crate::providers::RenderContext;
use crate::shared::ids::FieldGroupKind;
use crate::shared::logging::EventLog;
use crate::subscription::{
    configure_subscription_parameters, Configuration, FormMode, ParameterLayout, UiContext,
};
use crate::validation::{Readiness, ValidationController, ValidationState};
use std::sync::Arc;
use std::time::Duration;

pub struct FormSession<D: QueryDispatcher> {
    configuration: Configuration,
    ui: UiContext,
    form: FormModel,
    container: ContainerId,
    controller: ValidationController,
    dispatcher: D,
    messages: Box<dyn MessageBundle>,
}

impl FormSession<ThreadedDispatcher> {
    /// Session talking to the directory over HTTP as described by `settings`.
    pub fn connect(settings: &Settings, mode: FormMode, ui: UiContext) -> Self {
        let oracle = Arc::new(HttpExistenceOracle::from_settings(settings));
        let log = settings
            .log_path
            .as_ref()
            .map(|path| EventLog::to_path(path.clone()))
            .unwrap_or_default();
        Self::with_parts(
            mode,
            ui,
            ThreadedDispatcher::new(oracle),
            Box::new(DefaultMessages::new(settings.locale)),
            log,
        )
    }
}

impl<D: QueryDispatcher> FormSession<D> {
    pub fn new(mode: FormMode, ui: UiContext, dispatcher: D) -> Self {
        Self::with_parts(
            mode,
            ui,
            dispatcher,
            Box::new(DefaultMessages::default()),
            EventLog::disabled(),
        )
    }

    pub fn with_parts(
        mode: FormMode,
        ui: UiContext,
        dispatcher: D,
        messages: Box<dyn MessageBundle>,
        log: EventLog,
    ) -> Self {
        let mut form = FormModel::new();
        let container = form.add_container();
        let controller = ValidationController::new(ui.project_pkey.clone(), log);
        Self {
            configuration: Configuration::new(mode),
            ui,
            form,
            container,
            controller,
            dispatcher,
            messages,
        }
    }

    pub fn configure(&mut self, layout: &mut dyn ParameterLayout) {
        configure_subscription_parameters(&mut self.configuration, &self.ui, layout);
    }

    /// Renders each descriptor, in order, through the strategy registered for it.
    pub fn render(&mut self, parameters: &[ParameterDescriptor]) -> Result<(), FormError> {
        let kind = FieldGroupKind::form_group();
        for parameter in parameters {
            let strategy = self
                .configuration
                .providers
                .resolve(&kind, parameter.id.as_str());
            let mut cx = RenderContext {
                form: &mut self.form,
                validators: &mut self.configuration.validators,
                messages: self.messages.as_ref(),
                standard: self.configuration.providers.standard(),
            };
            strategy.render(
                &mut cx,
                parameter,
                Mount::Container(self.container),
                InputHandle::text(parameter.id.clone()),
            )?;
        }
        Ok(())
    }

    /// Types `value` into a field and runs its validator. `None` when the field
    /// carries no validator.
    pub fn input(&mut self, id: &str, value: &str) -> Result<Option<bool>, FormError> {
        self.form.set_value(id, value)?;
        self.validate(id)
    }

    /// Picks (or clears) an entry in a remote select and runs its validator.
    pub fn select(
        &mut self,
        id: &str,
        selection: Option<LookupSelection>,
    ) -> Result<Option<bool>, FormError> {
        self.form.select(id, selection)?;
        self.validate(id)
    }

    pub fn validate(&mut self, id: &str) -> Result<Option<bool>, FormError> {
        let Some(validator) = self.configuration.validators.get(id) else {
            return Ok(None);
        };
        self.controller
            .run(validator, &mut self.form, &mut self.dispatcher)
            .map(Some)
    }

    /// Applies completions that arrive within `timeout`; returns how many changed
    /// validation state.
    pub fn pump(&mut self, timeout: Duration) -> Result<usize, FormError> {
        let mut applied = 0;
        let mut wait = timeout;
        while let Some(completion) = self.dispatcher.poll(wait) {
            if self.controller.complete(&mut self.form, completion)? {
                applied += 1;
            }
            wait = Duration::ZERO;
        }
        Ok(applied)
    }

    pub fn state(&self, id: &str) -> &ValidationState {
        self.controller.state(id)
    }

    pub fn readiness(&self) -> Readiness {
        self.controller.readiness()
    }

    /// Localized text for a validation state, placeholders filled.
    pub fn feedback_text(&self, id: &str) -> Option<String> {
        let (rule, parameters) = match self.controller.state(id) {
            ValidationState::Warning(rule) => (*rule, Vec::new()),
            ValidationState::Error { rule, parameters } => (*rule, parameters.clone()),
            _ => return None,
        };
        self.messages
            .message(rule.message_key())
            .map(|template| crate::messages::format_message(template, &parameters))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Lets the host register its own field providers before `configure`.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn controller(&self) -> &ValidationController {
        &self.controller
    }
}
