//! Logical launchd commands and their results.
//!
//! Pure data: building the argv is done here, running it is an infrastructure
//! concern behind `SupervisorClient`.

use std::fmt;
use std::path::PathBuf;

// ── Commands ─────────────────────────────────────────────────────────────────

/// A `launchctl` subcommand issued by the lifecycle controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorCommand {
    /// Query live status of a job.
    Print { target: String },
    /// Unload a job; absent jobs are not an error for callers.
    Bootout { target: String },
    /// Load a manifest into a domain.
    Bootstrap { domain: String, manifest: PathBuf },
    /// Administratively enable a job (distinct from running it).
    Enable { target: String },
    /// Restart in place; `force` kills a running instance first.
    Kickstart { target: String, force: bool },
}

impl SupervisorCommand {
    /// argv passed to `launchctl`.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Print { target } => vec!["print".into(), target.clone()],
            Self::Bootout { target } => vec!["bootout".into(), target.clone()],
            Self::Bootstrap { domain, manifest } => vec![
                "bootstrap".into(),
                domain.clone(),
                manifest.display().to_string(),
            ],
            Self::Enable { target } => vec!["enable".into(), target.clone()],
            Self::Kickstart {
                target,
                force: true,
            } => vec!["kickstart".into(), "-k".into(), target.clone()],
            Self::Kickstart {
                target,
                force: false,
            } => vec!["kickstart".into(), target.clone()],
        }
    }

    /// Subcommand name, for log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Print { .. } => "print",
            Self::Bootout { .. } => "bootout",
            Self::Bootstrap { .. } => "bootstrap",
            Self::Enable { .. } => "enable",
            Self::Kickstart { .. } => "kickstart",
        }
    }
}

impl fmt::Display for SupervisorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "launchctl {}", self.args().join(" "))
    }
}

// ── Results ──────────────────────────────────────────────────────────────────

/// Exit status and merged stdout/stderr of one supervisor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorOutput {
    /// Process exit code; `-1` when the process could not be run or was
    /// killed by a signal.
    pub status: i32,
    pub output: String,
}

impl SupervisorOutput {
    #[must_use]
    pub fn new(status: i32, output: impl Into<String>) -> Self {
        Self {
            status,
            output: output.into(),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.status == 0
    }

    #[must_use]
    pub fn trimmed_output(&self) -> &str {
        self.output.trim()
    }
}
