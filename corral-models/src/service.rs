use serde::{Deserialize, Serialize};

/// Payload for the agent's service registration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRegistration {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "Check", skip_serializing_if = "Option::is_none")]
    pub check: Option<HealthCheck>,
}

impl ServiceRegistration {
    pub fn new(name: impl Into<String>) -> Self {
        ServiceRegistration {
            name: name.into(),
            id: None,
            address: None,
            port: None,
            tags: None,
            check: None,
        }
    }
}

/// Health check definition attached to a registration.
///
/// Interval and TTL travel as duration strings with a unit suffix,
/// e.g. `"10s"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthCheck {
    Script {
        #[serde(rename = "Script")]
        script: String,
        #[serde(rename = "Interval")]
        interval: String,
    },
    Ttl {
        #[serde(rename = "TTL")]
        ttl: String,
    },
}
