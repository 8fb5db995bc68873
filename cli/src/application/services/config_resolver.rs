//! Desired gateway run configuration: environment → persisted config → default.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::{ConfigSource, EnvSource};
use crate::domain::descriptor::{ENV_GATEWAY_PASSWORD, ENV_GATEWAY_TOKEN};
use crate::domain::{BindMode, ConnectionMode, DEFAULT_BIND_MODE, GatewayCredentials, GatewaySettings};

/// Environment override for the bind mode.
pub const ENV_GATEWAY_BIND: &str = "CLAWDBOT_GATEWAY_BIND";

/// Bind mode and credentials resolved for one enable request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredConfig {
    /// `None` when no source names a supported mode (or in remote mode).
    pub bind: Option<BindMode>,
    pub credentials: GatewayCredentials,
}

impl DesiredConfig {
    /// The bind mode to run with, falling back to loopback.
    #[must_use]
    pub fn bind_or_default(&self) -> BindMode {
        self.bind.unwrap_or(DEFAULT_BIND_MODE)
    }
}

/// Resolves the gateway's bind mode, token and password.
pub struct ConfigResolver<E, C> {
    env: E,
    config: C,
    mode: ConnectionMode,
}

impl<E: EnvSource, C: ConfigSource> ConfigResolver<E, C> {
    pub fn new(env: E, config: C, mode: ConnectionMode) -> Self {
        Self { env, config, mode }
    }

    /// Resolve everything at once, reading the config file a single time.
    pub fn resolve(&self) -> DesiredConfig {
        let settings = self.settings();
        DesiredConfig {
            bind: self.bind_mode(|| settings.bind.clone()),
            credentials: GatewayCredentials {
                token: self.resolve_token(),
                password: self.password(|| settings.auth_password.clone()),
            },
        }
    }

    /// Bind mode from `CLAWDBOT_GATEWAY_BIND`, else `gateway.bind`.
    ///
    /// Unsupported values in either source are skipped rather than reported.
    /// Always `None` when connected to a remote gateway.
    pub fn resolve_bind_mode(&self) -> Option<BindMode> {
        self.bind_mode(|| self.settings().bind)
    }

    /// `CLAWDBOT_GATEWAY_TOKEN`, trimmed; blank counts as unset.
    pub fn resolve_token(&self) -> Option<String> {
        non_blank(self.env.var(ENV_GATEWAY_TOKEN))
    }

    /// `CLAWDBOT_GATEWAY_PASSWORD`, else `gateway.auth.password`.
    ///
    /// A blank environment value falls through. The config value is trimmed
    /// but returned even when that leaves it empty.
    pub fn resolve_password(&self) -> Option<String> {
        self.password(|| self.settings().auth_password)
    }

    fn bind_mode(&self, config_bind: impl FnOnce() -> Option<String>) -> Option<BindMode> {
        if self.mode.is_remote() {
            return None;
        }
        if let Some(raw) = self.env.var(ENV_GATEWAY_BIND) {
            match BindMode::parse_lenient(&raw) {
                Some(mode) => return Some(mode),
                None => tracing::debug!(value = %raw, "ignoring unsupported {ENV_GATEWAY_BIND}"),
            }
        }
        let raw = config_bind()?;
        let mode = BindMode::parse_lenient(&raw);
        if mode.is_none() {
            tracing::debug!(value = %raw, "ignoring unsupported gateway.bind");
        }
        mode
    }

    fn password(&self, config_password: impl FnOnce() -> Option<String>) -> Option<String> {
        non_blank(self.env.var(ENV_GATEWAY_PASSWORD))
            .or_else(|| config_password().map(|p| p.trim().to_string()))
    }

    fn settings(&self) -> GatewaySettings {
        self.config.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config; using defaults");
            GatewaySettings::default()
        })
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
