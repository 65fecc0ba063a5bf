use super::layout::{instance_level_entries, node_level_entries, ParameterLayout};
use super::{Configuration, UiContext};
use crate::form::parameter::{group_id, ou_id, parent_group_id};
use crate::form::RemoteSelectSpec;
use crate::providers::{GroupCreateStrategy, RemoteSelectStrategy};
use crate::shared::ids::{FieldGroupKind, ParameterId};
use crate::validation::Validator;
use std::rc::Rc;

const OU_LOOKUP: &str = "service/id/ldap/customer/";
const PARENT_GROUP_LOOKUP: &str = "service/id/group";
const PARENT_GROUP_QUERY: &str = "?search[value]=";
const GROUP_LOOKUP: &str = "service/id/ldap/group/";

/// Entry point: installs the field overrides, then hands the ordered parameter
/// list for the current scope to `layout`.
pub fn configure_subscription_parameters(
    configuration: &mut Configuration,
    ui: &UiContext,
    layout: &mut dyn ParameterLayout,
) {
    // Parent group first: the group override captures whatever is registered
    // before it.
    register_parent_group_select(configuration, ui);
    register_group_select(configuration, ui);
    register_ou_select(configuration, ui);

    let entries = if ui.is_node_mode() {
        node_level_entries()
    } else {
        instance_level_entries()
    };
    layout.layout_parameters(configuration, entries);
}

pub fn register_remote_select(
    configuration: &mut Configuration,
    id: ParameterId,
    lookup_endpoint: &str,
    query_template: Option<&str>,
    allow_create_new: bool,
) {
    let strategy = RemoteSelectStrategy::new(RemoteSelectSpec {
        lookup_endpoint: lookup_endpoint.to_string(),
        query_template: query_template.map(str::to_string),
        allow_create_new,
    });
    configuration
        .providers
        .register(FieldGroupKind::form_group(), id, Rc::new(strategy));
}

/// OU lookup; new organizations may be typed in and are created with the
/// subscription.
pub fn register_ou_select(configuration: &mut Configuration, ui: &UiContext) {
    let id = ou_id();
    if configuration.creates_objects(ui) {
        configuration
            .validators
            .install(id.clone(), Validator::OuCreateMode);
    }
    register_remote_select(configuration, id, OU_LOOKUP, None, true);
}

pub fn register_parent_group_select(configuration: &mut Configuration, ui: &UiContext) {
    let id = parent_group_id();
    if configuration.creates_objects(ui) {
        configuration
            .validators
            .install(id.clone(), Validator::GroupCreateMode);
    }
    register_remote_select(
        configuration,
        id,
        PARENT_GROUP_LOOKUP,
        Some(PARENT_GROUP_QUERY),
        false,
    );
}

/// Link mode picks an existing group. Create mode computes the group name from a
/// simple name and the parent group or OU, with live validation.
pub fn register_group_select(configuration: &mut Configuration, ui: &UiContext) {
    let id = group_id();
    if configuration.creates_objects(ui) {
        let kind = FieldGroupKind::form_group();
        let previous = configuration.providers.resolve(&kind, id.as_str());
        configuration
            .providers
            .register(kind, id, Rc::new(GroupCreateStrategy::new(previous)));
    } else {
        register_remote_select(configuration, id, GROUP_LOOKUP, None, false);
    }
}
