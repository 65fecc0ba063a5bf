use crate::config::Settings;
use crate::shared::errors::OracleError;
use std::time::Duration;

pub trait ExistenceOracle: Send + Sync {
    fn group_exists(&self, full_name: &str) -> Result<bool, OracleError>;
}

pub fn group_exists_url(rest_base: &str, full_name: &str) -> String {
    format!(
        "{}service/id/group/{}/exists",
        rest_base,
        urlencoding::encode(full_name)
    )
}

#[derive(Debug, Clone)]
pub struct HttpExistenceOracle {
    rest_base: String,
    agent: ureq::Agent,
}

impl HttpExistenceOracle {
    pub fn new(rest_base: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            rest_base: rest_base.into(),
            agent,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.rest_base.clone(), settings.query_timeout())
    }
}

impl ExistenceOracle for HttpExistenceOracle {
    fn group_exists(&self, full_name: &str) -> Result<bool, OracleError> {
        let url = group_exists_url(&self.rest_base, full_name);
        let response = match self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(OracleError::Status {
                    full_name: full_name.to_string(),
                    status,
                })
            }
            Err(err) => {
                return Err(OracleError::Request {
                    full_name: full_name.to_string(),
                    message: err.to_string(),
                })
            }
        };

        response
            .into_json::<bool>()
            .map_err(|e| OracleError::Decode {
                full_name: full_name.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_url_encodes_the_full_name() {
        assert_eq!(
            group_exists_url("rest/", "acme-eu-devs"),
            "rest/service/id/group/acme-eu-devs/exists"
        );
        assert_eq!(
            group_exists_url("http://host/rest/", "acme eu/ops"),
            "http://host/rest/service/id/group/acme%20eu%2Fops/exists"
        );
    }
}
