//! Infrastructure implementation of the `ConfigSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigSource;
use crate::domain::GatewaySettings;

/// Overrides the config file location.
pub const ENV_CONFIG_PATH: &str = "CLAWDBOT_CONFIG_PATH";

/// Production implementation of `ConfigSource` that reads the app's JSON
/// config file.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Create a store for an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$CLAWDBOT_CONFIG_PATH`, else `~/.clawdbot/clawdbot.json`.
    #[must_use]
    pub fn for_home(home: &Path) -> Self {
        let path = std::env::var_os(ENV_CONFIG_PATH)
            .map_or_else(|| home.join(".clawdbot").join("clawdbot.json"), PathBuf::from);
        Self::with_path(path)
    }
}

impl ConfigSource for JsonConfigStore {
    fn load(&self) -> Result<GatewaySettings> {
        if !self.path.exists() {
            return Ok(GatewaySettings::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let root: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;
        Ok(GatewaySettings::from_value(&root))
    }
}
