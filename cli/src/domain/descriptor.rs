//! Service descriptor and its launchd property-list rendering.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

// ── Constants ────────────────────────────────────────────────────────────────

pub const ENV_PATH: &str = "PATH";
pub const ENV_IMAGE_BACKEND: &str = "CLAWDBOT_IMAGE_BACKEND";
pub const ENV_GATEWAY_TOKEN: &str = "CLAWDBOT_GATEWAY_TOKEN";
pub const ENV_GATEWAY_PASSWORD: &str = "CLAWDBOT_GATEWAY_PASSWORD";

/// Image backend handed to the gateway; `sips` ships with macOS.
pub const IMAGE_BACKEND: &str = "sips";

/// Directories appended after the relay dir in the job's `PATH`.
pub const PREFERRED_PATHS: &[&str] = &[
    "/opt/homebrew/bin",
    "/usr/local/bin",
    "/usr/bin",
    "/bin",
    "/usr/sbin",
    "/sbin",
];

// ── Descriptor ───────────────────────────────────────────────────────────────

/// Desired state of the launchd job. Built fresh for every enable request and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub label: String,
    /// argv; the first element is the resolved executable.
    pub program_arguments: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub working_directory: PathBuf,
    /// Both `StandardOutPath` and `StandardErrorPath` point here.
    pub log_path: PathBuf,
    pub run_at_load: bool,
    pub keep_alive: bool,
}

/// Credentials forwarded to the gateway through its environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayCredentials {
    pub token: Option<String>,
    pub password: Option<String>,
}

impl ServiceDescriptor {
    /// Assemble the descriptor for the gateway job.
    #[must_use]
    pub fn gateway(
        label: &str,
        program_arguments: Vec<String>,
        relay_dir: &Path,
        credentials: &GatewayCredentials,
        working_directory: &Path,
        log_path: &Path,
    ) -> Self {
        let mut environment = BTreeMap::new();
        environment.insert(ENV_PATH.to_string(), search_path(relay_dir));
        environment.insert(ENV_IMAGE_BACKEND.to_string(), IMAGE_BACKEND.to_string());
        if let Some(token) = &credentials.token {
            environment.insert(ENV_GATEWAY_TOKEN.to_string(), token.clone());
        }
        if let Some(password) = &credentials.password {
            environment.insert(ENV_GATEWAY_PASSWORD.to_string(), password.clone());
        }

        Self {
            label: label.to_string(),
            program_arguments,
            environment,
            working_directory: working_directory.to_path_buf(),
            log_path: log_path.to_path_buf(),
            run_at_load: true,
            keep_alive: true,
        }
    }
}

/// `PATH` for the job: the relay dir first, then the preferred system paths.
#[must_use]
pub fn search_path(relay_dir: &Path) -> String {
    std::iter::once(relay_dir.display().to_string())
        .chain(PREFERRED_PATHS.iter().map(|p| (*p).to_string()))
        .collect::<Vec<_>>()
        .join(":")
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// Escape a value for inclusion in a plist `<string>` element.
///
/// `&` is replaced first; doing it later would double-escape the entities
/// produced by the other replacements.
#[must_use]
pub fn escape_plist_value(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn plist_bool(value: bool) -> &'static str {
    if value { "<true/>" } else { "<false/>" }
}

/// Render the descriptor as a launchd property list.
///
/// Arguments and environment values are escaped. Label, paths and booleans
/// are controlled inputs and written verbatim.
#[must_use]
pub fn render_manifest(descriptor: &ServiceDescriptor) -> String {
    let mut args_xml = String::new();
    for arg in &descriptor.program_arguments {
        let _ = writeln!(args_xml, "      <string>{}</string>", escape_plist_value(arg));
    }

    let mut env_xml = String::new();
    for (key, value) in &descriptor.environment {
        let _ = writeln!(env_xml, "    <key>{key}</key>");
        let _ = writeln!(env_xml, "    <string>{}</string>", escape_plist_value(value));
    }

    let log_path = descriptor.log_path.display();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>Label</key>
  <string>{label}</string>
  <key>ProgramArguments</key>
  <array>
{args_xml}  </array>
  <key>WorkingDirectory</key>
  <string>{working_directory}</string>
  <key>RunAtLoad</key>
  {run_at_load}
  <key>KeepAlive</key>
  {keep_alive}
  <key>EnvironmentVariables</key>
  <dict>
{env_xml}  </dict>
  <key>StandardOutPath</key>
  <string>{log_path}</string>
  <key>StandardErrorPath</key>
  <string>{log_path}</string>
</dict>
</plist>
"#,
        label = descriptor.label,
        working_directory = descriptor.working_directory.display(),
        run_at_load = plist_bool(descriptor.run_at_load),
        keep_alive = plist_bool(descriptor.keep_alive),
    )
}

// ── Unit tests ───────────────────────────────────────────────────────────────
