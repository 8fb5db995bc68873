//! Locations inside the installed app bundle.

use std::path::PathBuf;

/// Name of the gateway binary shipped in the relay directory.
pub const GATEWAY_BINARY: &str = "clawdbot";

/// An installed `.app` bundle that embeds the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayBundle {
    root: PathBuf,
}

impl GatewayBundle {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<bundle>/Contents/Resources/Relay`
    #[must_use]
    pub fn relay_dir(&self) -> PathBuf {
        self.root.join("Contents").join("Resources").join("Relay")
    }

    /// The embedded gateway executable.
    #[must_use]
    pub fn executable(&self) -> PathBuf {
        self.relay_dir().join(GATEWAY_BINARY)
    }
}
