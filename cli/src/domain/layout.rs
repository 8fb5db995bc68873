//! Where the launch agent lives: labels, manifest paths and launchd targets.

use std::path::PathBuf;

use crate::domain::supervisor::SupervisorCommand;

// ── Constants ────────────────────────────────────────────────────────────────

pub const GATEWAY_LABEL: &str = "com.clawdbot.gateway";

/// Label used by earlier releases; removed on every enable.
pub const LEGACY_GATEWAY_LABEL: &str = "com.steipete.clawdbot.gateway";

/// Combined stdout/stderr log of the gateway job.
pub const GATEWAY_LOG_PATH: &str = "/tmp/clawdbot/clawdbot-gateway.log";

// ── Layout ───────────────────────────────────────────────────────────────────

/// Per-user placement of the gateway job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentLayout {
    pub uid: u32,
    pub home: PathBuf,
    pub label: String,
    pub legacy_label: String,
    pub log_path: PathBuf,
}

impl AgentLayout {
    /// Standard layout for the user with `home` and `uid`.
    #[must_use]
    pub fn for_user(home: impl Into<PathBuf>, uid: u32) -> Self {
        Self {
            uid,
            home: home.into(),
            label: GATEWAY_LABEL.to_string(),
            legacy_label: LEGACY_GATEWAY_LABEL.to_string(),
            log_path: PathBuf::from(GATEWAY_LOG_PATH),
        }
    }

    /// `~/Library/LaunchAgents`
    #[must_use]
    pub fn launch_agents_dir(&self) -> PathBuf {
        self.home.join("Library").join("LaunchAgents")
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.launch_agents_dir().join(format!("{}.plist", self.label))
    }

    #[must_use]
    pub fn legacy_manifest_path(&self) -> PathBuf {
        self.launch_agents_dir()
            .join(format!("{}.plist", self.legacy_label))
    }

    /// The per-user GUI domain, `gui/<uid>`.
    #[must_use]
    pub fn domain_target(&self) -> String {
        format!("gui/{}", self.uid)
    }

    fn service_target(&self, label: &str) -> String {
        format!("gui/{}/{label}", self.uid)
    }

    // ── Commands against the gateway job ──

    #[must_use]
    pub fn print(&self) -> SupervisorCommand {
        SupervisorCommand::Print {
            target: self.service_target(&self.label),
        }
    }

    #[must_use]
    pub fn bootout(&self) -> SupervisorCommand {
        SupervisorCommand::Bootout {
            target: self.service_target(&self.label),
        }
    }

    #[must_use]
    pub fn bootout_legacy(&self) -> SupervisorCommand {
        SupervisorCommand::Bootout {
            target: self.service_target(&self.legacy_label),
        }
    }

    #[must_use]
    pub fn bootstrap(&self) -> SupervisorCommand {
        SupervisorCommand::Bootstrap {
            domain: self.domain_target(),
            manifest: self.manifest_path(),
        }
    }

    #[must_use]
    pub fn enable(&self) -> SupervisorCommand {
        SupervisorCommand::Enable {
            target: self.service_target(&self.label),
        }
    }

    #[must_use]
    pub fn kickstart(&self, force: bool) -> SupervisorCommand {
        SupervisorCommand::Kickstart {
            target: self.service_target(&self.label),
            force,
        }
    }
}
