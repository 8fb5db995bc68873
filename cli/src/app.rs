//! Application context — unified state passed to every command handler.
//!
//! Wires the concrete infrastructure adapters into `LaunchAgentService` so
//! command handlers never construct them directly.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::config_resolver::ConfigResolver;
use crate::application::services::launch_agent::LaunchAgentService;
use crate::domain::{AgentLayout, ConnectionMode};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::JsonConfigStore;
use crate::infra::env::ProcessEnv;
use crate::infra::fs::HostFs;
use crate::infra::launchctl::LaunchctlSupervisor;
use crate::infra::paths;
use crate::infra::programs::BundleProgramResolver;
use crate::output::OutputContext;

/// The launch agent service as wired for production.
pub type GatewayService = LaunchAgentService<
    LaunchctlSupervisor<TokioCommandRunner>,
    HostFs,
    BundleProgramResolver,
    ProcessEnv,
    JsonConfigStore,
>;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    pub connection_mode: ConnectionMode,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    pub connection_mode: ConnectionMode,
    /// Where the invoking user's launch agent lives.
    pub layout: AgentLayout,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            connection_mode: flags.connection_mode,
            layout: paths::user_layout()?,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Build the launch agent service. `project_root` switches the gateway
    /// command line to a development checkout.
    #[must_use]
    pub fn launch_agent(&self, project_root: Option<PathBuf>) -> GatewayService {
        let config = JsonConfigStore::for_home(&self.layout.home);
        let resolver = ConfigResolver::new(ProcessEnv, config, self.connection_mode);
        let programs = BundleProgramResolver::new(project_root, std::env::var("PATH").ok());
        LaunchAgentService::new(
            LaunchctlSupervisor::default_runner(),
            HostFs,
            programs,
            resolver,
            self.layout.clone(),
        )
    }
}
