//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;

use crate::domain::{BindMode, GatewayBundle, GatewaySettings, SupervisorCommand, SupervisorOutput};

// ── Process Ports ─────────────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its exit status together with
    /// stdout and stderr merged into one stream, in the order written.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run(&self, program: &str, args: &[String]) -> Result<SupervisorOutput>;
}

/// The per-user service supervisor (launchd).
///
/// `run` is total: failures to execute the supervisor are reported as a
/// non-zero status, never as an error, so callers can decide per command
/// whether a failure matters.
#[allow(async_fn_in_trait)]
pub trait SupervisorClient {
    /// Issue one supervisor command and wait for it to exit.
    async fn run(&self, command: &SupervisorCommand) -> SupervisorOutput;
}

// ── Configuration Ports ───────────────────────────────────────────────────────

/// Read access to process environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Read access to the persisted app config.
pub trait ConfigSource {
    /// Load the gateway settings.
    ///
    /// A missing config file is not an error and yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<GatewaySettings>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the few filesystem operations the launch agent needs.
pub trait LocalFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file the current user may execute.
    fn is_executable(&self, path: &Path) -> bool;

    /// Replace `path` with `contents` so readers never observe a partial file.
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or renamed into place.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()>;

    /// Remove the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed, including when it does
    /// not exist.
    fn remove_file(&self, path: &Path) -> Result<()>;
}

// ── Program Resolution Port ───────────────────────────────────────────────────

/// Decides which command line launchd runs for the gateway.
pub trait ProgramResolver {
    /// Full argv (executable first) for a gateway listening on `port` with
    /// `bind`.
    fn program_arguments(&self, bundle: &GatewayBundle, port: u16, bind: BindMode) -> Vec<String>;
}
