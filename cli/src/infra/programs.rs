//! Chooses the gateway command line: the embedded relay binary, or a
//! development checkout when a project root is given.

use std::path::{Path, PathBuf};

use crate::application::ports::ProgramResolver;
use crate::domain::{BindMode, GatewayBundle};
use crate::infra::fs::is_executable;

/// Subcommand of the embedded binary that runs the gateway in the foreground.
const DAEMON_SUBCOMMAND: &str = "gateway-daemon";
/// Subcommand of the CLI entry point in a development checkout.
const DEV_SUBCOMMAND: &str = "gateway";

/// Production implementation of `ProgramResolver`.
#[derive(Debug, Clone, Default)]
pub struct BundleProgramResolver {
    project_root: Option<PathBuf>,
    search_path: Option<String>,
}

impl BundleProgramResolver {
    /// Resolve against the app bundle, or against `project_root` when set.
    /// `search_path` is the `PATH` used to locate `node`.
    #[must_use]
    pub fn new(project_root: Option<PathBuf>, search_path: Option<String>) -> Self {
        Self {
            project_root,
            search_path,
        }
    }

    /// Argv for a development checkout, if it has a runnable entry point.
    fn dev_arguments(&self, root: &Path) -> Option<Vec<String>> {
        let local_bin = root.join("node_modules").join(".bin").join("clawdbot");
        if is_executable(&local_bin) {
            return Some(vec![display(&local_bin), DEV_SUBCOMMAND.to_string()]);
        }

        let entry = root.join("dist").join("index.js");
        if !entry.is_file() {
            return None;
        }
        let node = self.find_on_path("node")?;
        Some(vec![display(&node), display(&entry), DEV_SUBCOMMAND.to_string()])
    }

    fn find_on_path(&self, name: &str) -> Option<PathBuf> {
        self.search_path
            .as_deref()?
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(name))
            .find(|candidate| is_executable(candidate))
    }
}

impl ProgramResolver for BundleProgramResolver {
    fn program_arguments(&self, bundle: &GatewayBundle, port: u16, bind: BindMode) -> Vec<String> {
        let mut args = match self.project_root.as_deref() {
            Some(root) => self.dev_arguments(root).unwrap_or_else(|| {
                tracing::warn!(
                    root = %root.display(),
                    "no gateway entry point in project root; using bundled gateway"
                );
                bundled_arguments(bundle)
            }),
            None => bundled_arguments(bundle),
        };
        args.extend([
            "--port".to_string(),
            port.to_string(),
            "--bind".to_string(),
            bind.as_str().to_string(),
        ]);
        args
    }
}

fn bundled_arguments(bundle: &GatewayBundle) -> Vec<String> {
    vec![display(&bundle.executable()), DAEMON_SUBCOMMAND.to_string()]
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
