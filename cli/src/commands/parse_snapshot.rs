//! `gatewayctl parse-snapshot` — decode `launchctl print` output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncReadExt as _;

use crate::domain::parse_snapshot;
use crate::output::json;

#[derive(Args, Debug, Default)]
pub struct ParseSnapshotArgs {
    /// Read supervisor output from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Run the parse-snapshot command. Always prints JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub async fn run(args: &ParseSnapshotArgs) -> Result<()> {
    let raw = match &args.file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("cannot read stdin")?;
            buf
        }
    };
    // launchd output is not guaranteed to be UTF-8; parsing never fails.
    let raw = String::from_utf8_lossy(&raw);
    json::print(&parse_snapshot(&raw))
}
