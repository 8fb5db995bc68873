//! The two fields of the persisted config the launch agent reads.
//!
//! The config file has a much larger schema owned elsewhere; only
//! `gateway.bind` and `gateway.auth.password` matter here, and only when they
//! are strings.

use serde_json::Value;

/// Gateway settings pulled out of the config tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewaySettings {
    /// Raw `gateway.bind`, unvalidated.
    pub bind: Option<String>,
    /// Raw `gateway.auth.password`, untrimmed.
    pub auth_password: Option<String>,
}

impl GatewaySettings {
    /// Extract the settings from a parsed config document. Missing keys and
    /// non-string values are treated as absent.
    #[must_use]
    pub fn from_value(root: &Value) -> Self {
        let gateway = root.get("gateway");
        let bind = gateway
            .and_then(|g| g.get("bind"))
            .and_then(Value::as_str)
            .map(String::from);
        let auth_password = gateway
            .and_then(|g| g.get("auth"))
            .and_then(|a| a.get("password"))
            .and_then(Value::as_str)
            .map(String::from);
        Self {
            bind,
            auth_password,
        }
    }
}
