//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::ConnectionMode;

/// Manage the gateway launch agent
#[derive(Parser)]
#[command(
    name = "gatewayctl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log supervisor commands and decisions to stderr; `status` also shows
    /// the running job's pid, port and bind
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How the app reaches its gateway; remote ignores the local bind setting
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CLAWDBOT_CONNECTION_MODE",
        default_value_t = ConnectionModeArg::Local
    )]
    pub connection_mode: ConnectionModeArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectionModeArg {
    Local,
    Remote,
}

impl From<ConnectionModeArg> for ConnectionMode {
    fn from(arg: ConnectionModeArg) -> Self {
        match arg {
            ConnectionModeArg::Local => Self::Local,
            ConnectionModeArg::Remote => Self::Remote,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Install the launch agent and make sure launchd runs it
    Enable(commands::GatewayArgs),

    /// Boot out the launch agent and remove its manifest
    Disable,

    /// Show whether the launch agent is loaded
    Status,

    /// Force-restart the gateway job
    Kickstart,

    /// Print the launch agent manifest without installing it
    Manifest(commands::GatewayArgs),

    /// Parse `launchctl print` output into a JSON snapshot
    ParseSnapshot(commands::parse_snapshot::ParseSnapshotArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose,
            connection_mode,
            command,
        } = self;

        // Commands that need neither a home directory nor launchd.
        match &command {
            Command::Version => {
                commands::version::run(json);
                return Ok(());
            }
            Command::ParseSnapshot(args) => return commands::parse_snapshot::run(args).await,
            _ => {}
        }

        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
            connection_mode: connection_mode.into(),
        })?;
        match command {
            Command::Enable(args) => commands::enable::run(&app, args).await,
            Command::Disable => commands::disable::run(&app).await,
            Command::Status => commands::status::run(&app, verbose).await,
            Command::Kickstart => commands::kickstart::run(&app).await,
            Command::Manifest(args) => commands::manifest::run(&app, args),
            Command::Version | Command::ParseSnapshot(_) => Ok(()),
        }
    }
}
