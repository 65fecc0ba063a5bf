//! Subscription parameter configuration for a directory-backed identity service.

pub mod configuration;
pub mod export;
pub mod layout;
pub mod orchestrator;

pub use configuration::{Configuration, FormMode, Scope, Subscription, UiContext};
pub use export::{render_features, render_features_today, ExportMenu, ServiceLink};
pub use layout::{
    instance_level_entries, node_level_entries, CollectedLayout, LayoutEntry, LayoutSection,
    ParameterLayout,
};
pub use orchestrator::{
    configure_subscription_parameters, register_group_select, register_ou_select,
    register_parent_group_select, register_remote_select,
};
