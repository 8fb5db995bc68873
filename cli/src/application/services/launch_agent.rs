//! Gateway launch agent lifecycle: enable, disable, kickstart, status.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Enabling is idempotent. When launchd already runs the job with the desired
//! port and bind (common right after login, or when enable is re-triggered by
//! an unrelated settings change) the job is kickstarted in place instead of
//! booted out, since `bootout` kills a just-started gateway and causes attach
//! loops.

use crate::application::ports::{
    ConfigSource, EnvSource, LocalFs, ProgramResolver, SupervisorClient,
};
use crate::application::services::config_resolver::{ConfigResolver, DesiredConfig};
use crate::domain::{
    AgentLayout, GatewayBundle, JobSnapshot, LaunchAgentError, ServiceDescriptor,
    SupervisorCommand, parse_snapshot, render_manifest,
};

/// What `set_enabled` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// The loaded job already matched; it was re-enabled and kickstarted.
    AlreadyLoaded,
    /// Any previous job was booted out and the fresh manifest bootstrapped.
    Bootstrapped,
    /// The job was booted out and its manifest removed.
    Disabled,
}

/// Lifecycle controller for the gateway launch agent.
///
/// Holds no state of its own: the manifest on disk and launchd's job table
/// are the only state, and both are re-read on every call.
pub struct LaunchAgentService<S, F, P, E, C> {
    supervisor: S,
    fs: F,
    programs: P,
    resolver: ConfigResolver<E, C>,
    layout: AgentLayout,
}

impl<S, F, P, E, C> LaunchAgentService<S, F, P, E, C>
where
    S: SupervisorClient,
    F: LocalFs,
    P: ProgramResolver,
    E: EnvSource,
    C: ConfigSource,
{
    pub fn new(
        supervisor: S,
        fs: F,
        programs: P,
        resolver: ConfigResolver<E, C>,
        layout: AgentLayout,
    ) -> Self {
        Self {
            supervisor,
            fs,
            programs,
            resolver,
            layout,
        }
    }

    /// `true` when the manifest exists and launchd knows the job.
    ///
    /// The manifest alone is not enough: it may be stale after the job was
    /// removed behind our back.
    pub async fn status(&self) -> bool {
        if !self.fs.exists(&self.layout.manifest_path()) {
            return false;
        }
        self.supervisor.run(&self.layout.print()).await.success()
    }

    /// Live snapshot of the loaded job, or `None` if launchd does not know it.
    pub async fn snapshot(&self) -> Option<JobSnapshot> {
        let result = self.supervisor.run(&self.layout.print()).await;
        result.success().then(|| parse_snapshot(&result.output))
    }

    /// Enable or disable the launch agent.
    ///
    /// # Errors
    ///
    /// Only enabling can fail: see [`Self::enable`].
    pub async fn set_enabled(
        &self,
        enabled: bool,
        bundle: &GatewayBundle,
        port: u16,
    ) -> Result<Reconcile, LaunchAgentError> {
        if enabled {
            self.enable(bundle, port).await
        } else {
            Ok(self.disable().await)
        }
    }

    /// Install the manifest and make sure launchd runs it.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchAgentError::MissingExecutable`] if the bundle has no
    /// executable gateway (nothing is written and launchd is not touched), or
    /// [`LaunchAgentError::BootstrapFailed`] if launchd rejects the manifest.
    pub async fn enable(
        &self,
        bundle: &GatewayBundle,
        port: u16,
    ) -> Result<Reconcile, LaunchAgentError> {
        self.remove_legacy_job().await;

        let executable = bundle.executable();
        if !self.fs.is_executable(&executable) {
            tracing::error!(path = %executable.display(), "launchd enable failed: gateway missing");
            return Err(LaunchAgentError::MissingExecutable { path: executable });
        }

        let desired = self.resolver.resolve();
        let bind = desired.bind_or_default();
        tracing::info!(port, bind = %bind, "launchd enable requested");

        // Written even on the fast path: the manifest is what the next
        // bootstrap (e.g. at login) reads.
        self.write_manifest(&self.descriptor(bundle, port, &desired));

        if let Some(snapshot) = self.snapshot().await
            && snapshot.matches(port, bind.as_str())
        {
            tracing::info!(pid = ?snapshot.pid, "launchd job already loaded with desired config; skipping bootout");
            self.best_effort(&self.layout.enable()).await;
            self.best_effort(&self.layout.kickstart(false)).await;
            return Ok(Reconcile::AlreadyLoaded);
        }

        self.best_effort(&self.layout.enable()).await;
        self.best_effort(&self.layout.bootout()).await;
        let bootstrap = self.required(&self.layout.bootstrap()).await;
        // launchd sometimes leaves a freshly bootstrapped job disabled.
        self.best_effort(&self.layout.enable()).await;
        bootstrap.map(|()| Reconcile::Bootstrapped)
    }

    /// Boot out the job and delete its manifest. Never fails.
    pub async fn disable(&self) -> Reconcile {
        tracing::info!("launchd disable requested");
        self.best_effort(&self.layout.bootout()).await;
        let path = self.layout.manifest_path();
        if let Err(e) = self.fs.remove_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "manifest not removed");
        }
        Reconcile::Disabled
    }

    /// Force-restart the job (`kickstart -k`). Fire and forget.
    pub async fn kickstart(&self) {
        self.best_effort(&self.layout.kickstart(true)).await;
    }

    /// The manifest `enable` would write, without touching disk or launchd.
    pub fn render_manifest(&self, bundle: &GatewayBundle, port: u16) -> String {
        let desired = self.resolver.resolve();
        render_manifest(&self.descriptor(bundle, port, &desired))
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn descriptor(
        &self,
        bundle: &GatewayBundle,
        port: u16,
        desired: &DesiredConfig,
    ) -> ServiceDescriptor {
        let program_arguments =
            self.programs
                .program_arguments(bundle, port, desired.bind_or_default());
        ServiceDescriptor::gateway(
            &self.layout.label,
            program_arguments,
            &bundle.relay_dir(),
            &desired.credentials,
            &self.layout.home,
            &self.layout.log_path,
        )
    }

    fn write_manifest(&self, descriptor: &ServiceDescriptor) {
        let path = self.layout.manifest_path();
        if let Err(e) = self.fs.write_atomic(&path, &render_manifest(descriptor)) {
            tracing::error!(path = %path.display(), error = %format!("{e:#}"), "launchd plist write failed");
        }
    }

    async fn remove_legacy_job(&self) {
        self.best_effort(&self.layout.bootout_legacy()).await;
        let _ = self.fs.remove_file(&self.layout.legacy_manifest_path());
    }

    /// Run a command whose failure does not matter to the caller.
    async fn best_effort(&self, command: &SupervisorCommand) {
        let result = self.supervisor.run(command).await;
        if result.success() {
            return;
        }
        let msg = result.trimmed_output();
        // Booting out a job that is not loaded is the normal case.
        if matches!(command, SupervisorCommand::Bootout { .. }) {
            tracing::debug!(status = result.status, output = msg, "launchd bootout failed");
        } else if msg.is_empty() {
            tracing::warn!(status = result.status, "launchd {} failed", command.name());
        } else {
            tracing::warn!(status = result.status, "launchd {} failed: {msg}", command.name());
        }
    }

    /// Run a command whose failure is reported to the caller.
    async fn required(&self, command: &SupervisorCommand) -> Result<(), LaunchAgentError> {
        let result = self.supervisor.run(command).await;
        if result.success() {
            return Ok(());
        }
        let err = LaunchAgentError::bootstrap_failed(&result.output);
        tracing::error!(status = result.status, "launchd {} failed: {err}", command.name());
        Err(err)
    }
}
