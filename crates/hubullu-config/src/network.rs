use serde::{Deserialize, Serialize};

use crate::Vars;

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("hubullu/", env!("CARGO_PKG_VERSION")).to_string()
}

/// HTTP settings shared by all translation sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per request timeout, so a hung lookup cannot stall the prompt
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub(crate) fn from_vars(vars: &Vars) -> Self {
        let timeout_seconds = vars("HUBULLU_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent = vars("HUBULLU_USER_AGENT").unwrap_or_else(default_user_agent);

        Self {
            timeout_seconds,
            user_agent,
        }
    }
}
