//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` spawns the child with stdout and stderr attached to
//! the same pipe, so the captured text interleaves exactly as the child wrote
//! it.

use std::io::{PipeReader, Read};
use std::process::Stdio;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;
use crate::domain::SupervisorOutput;

/// Production `CommandRunner` backed by `tokio::process::Command`.
///
/// No timeout is applied: the supervisor is trusted to answer, and a hung
/// child hangs the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<SupervisorOutput> {
        let (reader, writer) = std::io::pipe().context("creating output pipe")?;
        let stderr = writer.try_clone().context("cloning output pipe")?;

        // The Command owns the parent's copies of the write end; it must be
        // dropped before reading or the reader never sees EOF.
        let mut child = {
            let mut cmd = tokio::process::Command::new(program);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr);
            cmd.spawn()
                .with_context(|| format!("failed to spawn {program}"))?
        };

        let output = tokio::task::spawn_blocking(move || read_all(reader)).await;
        // Reap the child before surfacing any read failure.
        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))?;
        let output = output
            .context("output reader panicked")?
            .with_context(|| format!("reading output of {program}"))?;

        Ok(SupervisorOutput::new(
            status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output),
        ))
    }
}

fn read_all(mut reader: PipeReader) -> std::io::Result<Vec<u8>> {
    let mut output = Vec::new();
    reader.read_to_end(&mut output)?;
    Ok(output)
}
