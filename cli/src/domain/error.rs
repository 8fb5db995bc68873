//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Message used when `launchctl bootstrap` fails without printing anything.
pub const BOOTSTRAP_FALLBACK_MESSAGE: &str = "Failed to bootstrap gateway launchd job";

// ── Launch agent errors ───────────────────────────────────────────────────────

/// The only failures of the launch agent lifecycle a caller ever sees.
/// Everything else is logged and swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchAgentError {
    #[error("Embedded gateway missing in bundle; rebuild via scripts/package-mac-app.sh")]
    MissingExecutable { path: PathBuf },

    /// Trimmed `launchctl bootstrap` output, or the fallback message.
    #[error("{0}")]
    BootstrapFailed(String),
}

impl LaunchAgentError {
    /// Build a bootstrap failure from raw supervisor output.
    #[must_use]
    pub fn bootstrap_failed(output: &str) -> Self {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            Self::BootstrapFailed(BOOTSTRAP_FALLBACK_MESSAGE.to_string())
        } else {
            Self::BootstrapFailed(trimmed.to_string())
        }
    }

    /// Stable machine-readable code for `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingExecutable { .. } => "missing_executable",
            Self::BootstrapFailed(_) => "bootstrap_failed",
        }
    }
}
