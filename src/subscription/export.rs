use super::Subscription;
use crate::form::parameter::GROUP;
use chrono::NaiveDate;

const EXPORT_TITLE: &str = "export";
const EXPORT_ICON: &str = "file-excel-o";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLink {
    pub icon: &'static str,
    pub href: String,
    /// Message key of the link's label.
    pub title_key: &'static str,
    pub download: bool,
}

/// Activity export drop-down shown on a subscription row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMenu {
    pub title_key: &'static str,
    pub links: Vec<ServiceLink>,
}

pub fn render_features(
    subscription: &Subscription,
    rest_base: &str,
    today: NaiveDate,
) -> ExportMenu {
    let group = subscription.parameter(GROUP).unwrap_or_default();
    let date = today.format("%Y-%m-%d");
    let base = format!("{rest_base}service/id/ldap/activity/{}", subscription.id);
    let link = |kind: &str, title_key: &'static str| ServiceLink {
        icon: EXPORT_ICON,
        href: format!("{base}/{kind}-{group}-{date}.csv"),
        title_key,
        download: true,
    };
    ExportMenu {
        title_key: EXPORT_TITLE,
        links: vec![
            link("group", "service:id:activity-group"),
            link("project", "service:id:activity-project"),
        ],
    }
}

/// Same as [`render_features`], dated with the local calendar day.
pub fn render_features_today(subscription: &Subscription, rest_base: &str) -> ExportMenu {
    render_features(subscription, rest_base, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ids::ParameterId;
    use std::collections::BTreeMap;

    #[test]
    fn export_links_name_the_group_and_the_day() {
        let subscription = Subscription {
            id: 42,
            parameters: BTreeMap::from([(
                ParameterId::parse(GROUP).expect("id"),
                "acme-eu-devs".to_string(),
            )]),
        };
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).expect("date");

        let menu = render_features(&subscription, "rest/", today);

        assert_eq!(menu.title_key, "export");
        let hrefs: Vec<&str> = menu.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "rest/service/id/ldap/activity/42/group-acme-eu-devs-2026-03-09.csv",
                "rest/service/id/ldap/activity/42/project-acme-eu-devs-2026-03-09.csv",
            ]
        );
        assert!(menu.links.iter().all(|l| l.download));
    }

    #[test]
    fn export_links_default_to_the_local_day() {
        let subscription = Subscription {
            id: 7,
            parameters: BTreeMap::new(),
        };
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

        let menu = render_features_today(&subscription, "rest/");

        assert!(menu.links[0].href.ends_with(&format!("/group--{today}.csv")));
        assert_eq!(menu.links[1].title_key, "service:id:activity-project");
    }
}
