use super::Configuration;
use crate::shared::ids::ParameterId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEntry {
    Section(&'static str),
    Parameter(&'static str),
}

/// Lays parameters out in the order and sections given.
pub trait ParameterLayout {
    fn layout_parameters(&mut self, configuration: &Configuration, entries: &[LayoutEntry]);
}

const NODE_LEVEL: &[LayoutEntry] = &[
    LayoutEntry::Section("server"),
    LayoutEntry::Parameter("service:id:ldap:url"),
    LayoutEntry::Parameter("service:id:ldap:user-dn"),
    LayoutEntry::Parameter("service:id:ldap:password"),
    LayoutEntry::Parameter("service:id:ldap:base-dn"),
    LayoutEntry::Section("authentication"),
    LayoutEntry::Parameter("service:id:ldap:clear-password"),
    LayoutEntry::Parameter("service:id:ldap:local-id-attribute"),
    LayoutEntry::Parameter("service:id:ldap:locked-attribute"),
    LayoutEntry::Parameter("service:id:ldap:referral"),
    LayoutEntry::Parameter("service:id:ldap:locked-value"),
    LayoutEntry::Parameter("service:id:uid-pattern"),
    LayoutEntry::Parameter("service:id:ldap:self-search"),
    LayoutEntry::Parameter("service:id:ldap:department-attribute"),
    LayoutEntry::Parameter("service:id:ldap:login-attributes"),
    LayoutEntry::Parameter("service:id:ldap:uid-attribute"),
    LayoutEntry::Section("people"),
    LayoutEntry::Parameter("service:id:ldap:people-dn"),
    LayoutEntry::Parameter("service:id:ldap:people-internal-dn"),
    LayoutEntry::Parameter("service:id:ldap:quarantine-dn"),
    LayoutEntry::Parameter("service:id:ldap:people-class"),
    LayoutEntry::Parameter("service:id:ldap:people-class-create"),
    LayoutEntry::Parameter("service:id:ldap:people-custom-attributes"),
    LayoutEntry::Section("groups"),
    LayoutEntry::Parameter("service:id:ldap:groups-dn"),
    LayoutEntry::Parameter("service:id:ldap:groups-class"),
    LayoutEntry::Parameter("service:id:ldap:groups-class-create"),
    LayoutEntry::Parameter("service:id:ldap:groups-member-attribute"),
    LayoutEntry::Section("companies"),
    LayoutEntry::Parameter("service:id:ldap:companies-dn"),
    LayoutEntry::Parameter("service:id:ldap:company-pattern"),
    LayoutEntry::Parameter("service:id:ldap:companies-class"),
    LayoutEntry::Parameter("service:id:ldap:companies-class-create"),
];

const INSTANCE_LEVEL: &[LayoutEntry] = &[
    LayoutEntry::Parameter("service:id:ou"),
    LayoutEntry::Parameter("service:id:parent-group"),
    LayoutEntry::Parameter("service:id:group"),
];

pub fn node_level_entries() -> &'static [LayoutEntry] {
    NODE_LEVEL
}

pub fn instance_level_entries() -> &'static [LayoutEntry] {
    INSTANCE_LEVEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSection {
    /// `None` for parameters listed before any section marker.
    pub name: Option<String>,
    pub parameters: Vec<ParameterId>,
}

/// Layout that only records the sections it was handed.
#[derive(Debug, Clone, Default)]
pub struct CollectedLayout {
    sections: Vec<LayoutSection>,
}

impl CollectedLayout {
    pub fn sections(&self) -> &[LayoutSection] {
        &self.sections
    }

    pub fn parameter_ids(&self) -> impl Iterator<Item = &ParameterId> {
        self.sections
            .iter()
            .flat_map(|section| section.parameters.iter())
    }
}

impl ParameterLayout for CollectedLayout {
    fn layout_parameters(&mut self, _configuration: &Configuration, entries: &[LayoutEntry]) {
        self.sections.clear();
        for entry in entries {
            match entry {
                LayoutEntry::Section(name) => self.sections.push(LayoutSection {
                    name: Some((*name).to_string()),
                    parameters: Vec::new(),
                }),
                LayoutEntry::Parameter(id) => {
                    if self.sections.is_empty() {
                        self.sections.push(LayoutSection {
                            name: None,
                            parameters: Vec::new(),
                        });
                    }
                    if let (Some(section), Ok(id)) =
                        (self.sections.last_mut(), ParameterId::parse(id))
                    {
                        section.parameters.push(id);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_level_lists_twenty_eight_parameters_in_five_sections() {
        let sections = NODE_LEVEL
            .iter()
            .filter(|entry| matches!(entry, LayoutEntry::Section(_)))
            .count();
        let parameters = NODE_LEVEL.len() - sections;
        assert_eq!(sections, 5);
        assert_eq!(parameters, 28);
        assert!(NODE_LEVEL.iter().all(|entry| match entry {
            LayoutEntry::Parameter(id) => ParameterId::parse(id).is_ok(),
            LayoutEntry::Section(_) => true,
        }));
    }
}
