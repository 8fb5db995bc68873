//! Command handlers, one module per subcommand.

pub mod disable;
pub mod enable;
pub mod kickstart;
pub mod manifest;
pub mod parse_snapshot;
pub mod status;
pub mod version;

use std::path::PathBuf;

use clap::Args;

use crate::domain::GatewayBundle;

/// Default gateway port.
pub const DEFAULT_PORT: u16 = 18789;

/// Arguments shared by commands that describe the gateway job.
#[derive(Args, Debug, Clone)]
pub struct GatewayArgs {
    /// Path to the installed app bundle that embeds the gateway
    #[arg(long, value_name = "PATH")]
    pub bundle: PathBuf,

    /// Port the gateway listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Run the gateway from a development checkout instead of the bundle
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

impl GatewayArgs {
    #[must_use]
    pub fn gateway_bundle(&self) -> GatewayBundle {
        GatewayBundle::new(&self.bundle)
    }
}
