use dirbind::form::parameter::{GROUP, GROUP_SIMPLE_NAME, OU, PARENT_GROUP};
use dirbind::form::ControlKind;
use dirbind::shared::ids::FieldGroupKind;
use dirbind::subscription::{
    configure_subscription_parameters, instance_level_entries, CollectedLayout, Configuration,
    FormMode, LayoutEntry, UiContext,
};
use dirbind::validation::Validator;

fn section_names(layout: &CollectedLayout) -> Vec<Option<String>> {
    layout.sections().iter().map(|s| s.name.clone()).collect()
}

#[test]
fn subscription_orchestrator_lays_out_node_sections_in_every_mode() {
    for mode in [FormMode::Create, FormMode::Link, FormMode::Update] {
        let mut configuration = Configuration::new(mode);
        let mut layout = CollectedLayout::default();
        configure_subscription_parameters(&mut configuration, &UiContext::node(), &mut layout);

        assert_eq!(
            section_names(&layout),
            vec![
                Some("server".to_string()),
                Some("authentication".to_string()),
                Some("people".to_string()),
                Some("groups".to_string()),
                Some("companies".to_string()),
            ]
        );
        assert_eq!(layout.parameter_ids().count(), 28);
        assert_eq!(
            layout.sections()[0].parameters[0].as_str(),
            "service:id:ldap:url"
        );
        assert!(configuration.validators.is_empty());
    }
}

#[test]
fn subscription_orchestrator_lays_out_identity_fields_for_instances() {
    let mut configuration = Configuration::new(FormMode::Link);
    let mut layout = CollectedLayout::default();
    configure_subscription_parameters(
        &mut configuration,
        &UiContext::instance("acme"),
        &mut layout,
    );

    let ids: Vec<&str> = layout.parameter_ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec![OU, PARENT_GROUP, GROUP]);
    assert_eq!(
        instance_level_entries(),
        &[
            LayoutEntry::Parameter(OU),
            LayoutEntry::Parameter(PARENT_GROUP),
            LayoutEntry::Parameter(GROUP),
        ]
    );
}

#[test]
fn subscription_orchestrator_installs_validators_only_when_creating() {
    let mut create = Configuration::new(FormMode::Create);
    configure_subscription_parameters(
        &mut create,
        &UiContext::instance("acme"),
        &mut CollectedLayout::default(),
    );
    assert_eq!(create.validators.get(OU), Some(Validator::OuCreateMode));
    assert_eq!(
        create.validators.get(PARENT_GROUP),
        Some(Validator::GroupCreateMode)
    );
    // Installed when the group field renders.
    assert_eq!(create.validators.get(GROUP_SIMPLE_NAME), None);

    let mut link = Configuration::new(FormMode::Link);
    configure_subscription_parameters(
        &mut link,
        &UiContext::instance("acme"),
        &mut CollectedLayout::default(),
    );
    assert!(link.validators.is_empty());
    let kind = FieldGroupKind::form_group();
    for id in [OU, PARENT_GROUP, GROUP] {
        assert!(link.providers.has_override(&kind, id), "{id}");
    }
}

#[test]
fn subscription_orchestrator_wires_lookup_endpoints() {
    use dirbind::directory::DeferredDispatcher;
    use dirbind::form::ParameterDescriptor;
    use dirbind::session::FormSession;
    use dirbind::shared::ids::ParameterId;

    let mut session = FormSession::new(
        FormMode::Link,
        UiContext::instance("acme"),
        DeferredDispatcher::new(),
    );
    session.configure(&mut CollectedLayout::default());
    let descriptors: Vec<ParameterDescriptor> = [OU, PARENT_GROUP, GROUP]
        .iter()
        .map(|id| ParameterDescriptor::new(ParameterId::parse(id).expect("id")))
        .collect();
    session.render(&descriptors).expect("render");

    let endpoint = |id: &str| match &session.form().field(id).expect("field").control {
        ControlKind::RemoteSelect(spec) => (
            spec.lookup_endpoint.clone(),
            spec.query_template.clone(),
            spec.allow_create_new,
        ),
        ControlKind::Text => panic!("{id} is not a remote select"),
    };
    assert_eq!(
        endpoint(OU),
        ("service/id/ldap/customer/".to_string(), None, true)
    );
    assert_eq!(
        endpoint(PARENT_GROUP),
        (
            "service/id/group".to_string(),
            Some("?search[value]=".to_string()),
            false
        )
    );
    assert_eq!(
        endpoint(GROUP),
        ("service/id/ldap/group/".to_string(), None, false)
    );
    assert!(session.form().field(GROUP_SIMPLE_NAME).is_none());
}
