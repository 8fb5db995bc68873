//! Infrastructure adapter that routes supervisor commands to `launchctl`.

use crate::application::ports::{CommandRunner, SupervisorClient};
use crate::domain::{SupervisorCommand, SupervisorOutput};
use crate::infra::command_runner::TokioCommandRunner;

pub const LAUNCHCTL: &str = "/bin/launchctl";

/// `SupervisorClient` backed by `launchctl`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct LaunchctlSupervisor<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> LaunchctlSupervisor<R> {
    /// Create a supervisor client that runs `/bin/launchctl` through `runner`.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            program: LAUNCHCTL.to_string(),
        }
    }
}

impl LaunchctlSupervisor<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner)
    }
}

impl<R: CommandRunner> SupervisorClient for LaunchctlSupervisor<R> {
    async fn run(&self, command: &SupervisorCommand) -> SupervisorOutput {
        tracing::debug!(%command, "running supervisor command");
        match self.runner.run(&self.program, &command.args()).await {
            Ok(result) => {
                tracing::debug!(status = result.status, "{} exited", command.name());
                result
            }
            Err(e) => SupervisorOutput::new(-1, format!("{e:#}")),
        }
    }
}
