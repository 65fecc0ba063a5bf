use crate::shared::serde_ext::parse_via_string;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Root,
    Fr,
}

impl Locale {
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "root" | "en" => Ok(Self::Root),
            "fr" => Ok(Self::Fr),
            _ => Err("locale must be one of: root, en, fr".to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_via_string(deserializer, "locale", Self::parse)
    }
}

/// Key → text lookup the UI layer resolves labels and rule messages through.
pub trait MessageBundle {
    fn message(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages {
    locale: Locale,
}

impl DefaultMessages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl MessageBundle for DefaultMessages {
    fn message(&self, key: &str) -> Option<&str> {
        let localized = match self.locale {
            Locale::Root => None,
            Locale::Fr => lookup(FR, key),
        };
        localized.or_else(|| lookup(ROOT, key))
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

const ROOT: &[(&str, &str)] = &[
    ("service:id:ldap:base-dn", "Base DN"),
    ("service:id:ldap:companies-dn", "Companies DN"),
    ("service:id:ldap:companies-class", "Companies class"),
    ("service:id:ldap:companies-class-create", "Companies class for creation"),
    ("service:id:ldap:company-pattern", "Company pattern capture id from DN"),
    ("service:id:ldap:department-attribute", "Department attribute"),
    ("service:id:ldap:groups-dn", "Groups DN"),
    ("service:id:ldap:groups-class", "Groups class"),
    ("service:id:ldap:groups-class-create", "Groups class for creation"),
    ("service:id:ldap:groups-member-attribute", "Group member attribute"),
    ("service:id:ldap:local-id-attribute", "Local ID attribute"),
    ("service:id:ldap:locked-attribute", "Locked attribute"),
    ("service:id:ldap:locked-value", "Locked match value"),
    ("service:id:ldap:login-attributes", "Login attributes"),
    ("service:id:ldap:password", "Connection password"),
    ("service:id:ldap:people-class", "People class"),
    ("service:id:ldap:people-class-create", "People class for creation"),
    ("service:id:ldap:people-custom-attributes", "People custom attributes"),
    ("service:id:ldap:people-dn", "People DN"),
    ("service:id:ldap:people-internal-dn", "People internal DN"),
    ("service:id:ldap:quarantine-dn", "Quarantine DN"),
    ("service:id:ldap:referral", "Referral mode"),
    (
        "service:id:ldap:referral-description",
        "When provided, the given referrals instruction are followed.",
    ),
    ("service:id:ldap:self-search", "Users can search"),
    (
        "service:id:ldap:self-search-description",
        "When checked, at authentication time the DN is retrieved from the LDAP server with a search using the provided user credentials. Otherwise, the DN is computed from the cache database and a single bind is executed.",
    ),
    ("service:id:ldap:uid-attribute", "UID attribute"),
    ("service:id:ldap:url", "Connection URL"),
    ("service:id:ldap:user-dn", "Connection user"),
    ("service:id:ldap:clear-password", "Clear password"),
    ("service:id:uid-pattern", "UID pattern"),
    ("service:id:ou", "Organization"),
    ("service:id:parent-group", "Parent group"),
    ("service:id:group", "Group"),
    ("service:id:group-simple-name", "Group name"),
    (
        "service:id:ldap:group-create",
        "Computed from the parent group or organization and the group name",
    ),
    (
        "service:id:ou-not-exists",
        "This organization does not exist yet and will be created",
    ),
    ("already-exist", "{0} '{1}' already exists"),
    ("StartsWith", "Must start with '{0}'"),
    (
        "validation-unavailable",
        "Unable to check '{0}' right now, try again",
    ),
    ("export", "Export"),
    ("service:id:activity-group", "Group activity"),
    ("service:id:activity-project", "Project activity"),
];

const FR: &[(&str, &str)] = &[
    ("service:id:ldap:base-dn", "Base DN"),
    ("service:id:ldap:companies-dn", "DN des sociétés"),
    ("service:id:ldap:companies-class", "Classe des sociétés"),
    (
        "service:id:ldap:company-pattern",
        "Pattern de capture de l'identifiant de société dans un DN",
    ),
    ("service:id:ldap:department-attribute", "Attribut de département"),
    ("service:id:ldap:groups-dn", "DN des groupes"),
    ("service:id:ldap:groups-class", "Classe des groupes"),
    ("service:id:ldap:groups-member-attribute", "Attribut des membres"),
    ("service:id:ldap:local-id-attribute", "Attribut d'identifiant local"),
    ("service:id:ldap:locked-attribute", "Attribut de verrouillage"),
    ("service:id:ldap:locked-value", "Valeur de verrouillage"),
    ("service:id:ldap:password", "Mot de passe de connexion"),
    ("service:id:ldap:people-class", "Class des personnes"),
    ("service:id:ldap:people-dn", "DN des personnes"),
    ("service:id:ldap:quarantine-dn", "DN de quarantaine"),
    ("service:id:ldap:referral", "Mode referral"),
    (
        "service:id:ldap:referral-description",
        "Si renseigné, les instructions données de suivi seront exécutées.",
    ),
    ("service:id:ldap:self-search", "Utilisateurs peuvent rechercher"),
    (
        "service:id:ldap:self-search-description",
        "Lorsque coché, au moment de l'authentification le DN est récupéré par une recherche en utilisant les secrets de l'utilisateur. Sinon, le DN est calculé à partir du cache de données et seule une authentification est effectuée.",
    ),
    ("service:id:ldap:uid-attribute", "Attribut UID"),
    ("service:id:ldap:url", "URL de connexion"),
    ("service:id:ldap:user-dn", "Utilisateur de connexion"),
    ("service:id:ldap:clear-password", "Mot de passe non-crypté"),
    ("service:id:ou", "Organisation"),
    ("service:id:parent-group", "Groupe parent"),
    ("service:id:group", "Groupe"),
    ("service:id:group-simple-name", "Nom du groupe"),
    (
        "service:id:ou-not-exists",
        "Cette organisation n'existe pas encore et sera créée",
    ),
    ("already-exist", "{0} '{1}' existe déjà"),
    ("StartsWith", "Doit commencer par '{0}'"),
    ("export", "Export"),
];

/// Fills `{0}`, `{1}`… placeholders.
pub fn format_message(template: &str, parameters: &[String]) -> String {
    parameters
        .iter()
        .enumerate()
        .fold(template.to_string(), |text, (index, value)| {
            text.replace(&format!("{{{index}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_bundle_falls_back_to_root() {
        let fr = DefaultMessages::new(Locale::Fr);
        assert_eq!(fr.message("service:id:ldap:url"), Some("URL de connexion"));
        assert_eq!(
            fr.message("service:id:ldap:people-internal-dn"),
            Some("People internal DN")
        );
        assert_eq!(fr.message("missing-key"), None);
    }

    #[test]
    fn format_message_fills_positional_parameters() {
        let root = DefaultMessages::default();
        let template = root.message("already-exist").expect("template");
        assert_eq!(
            format_message(
                template,
                &["service:id:group".to_string(), "acme-eu-devs".to_string()]
            ),
            "service:id:group 'acme-eu-devs' already exists"
        );
    }

    #[test]
    fn locale_parse_accepts_known_values() {
        assert_eq!(Locale::parse("FR"), Ok(Locale::Fr));
        assert_eq!(Locale::parse("en"), Ok(Locale::Root));
        assert!(Locale::parse("de").is_err());
    }
}
