//! `gatewayctl status` — is the launch agent loaded, and with what settings.

use anyhow::Result;
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::JobSnapshot;
use crate::output::json;

#[derive(Serialize)]
struct StatusReport<'a> {
    loaded: bool,
    label: &'a str,
    manifest: String,
    snapshot: Option<JobSnapshot>,
}

/// Run the status command. `verbose` (the global `--verbose`) adds pid, port
/// and bind of the running job; JSON output always includes them.
///
/// # Errors
///
/// Returns an error only if JSON output cannot be serialized.
pub async fn run(app: &AppContext, verbose: bool) -> Result<()> {
    let service = app.launch_agent(None);
    let loaded = service.status().await;
    let snapshot = if loaded && (verbose || app.is_json()) {
        service.snapshot().await
    } else {
        None
    };

    if app.is_json() {
        return json::print(&StatusReport {
            loaded,
            label: &app.layout.label,
            manifest: app.layout.manifest_path().display().to_string(),
            snapshot,
        });
    }

    if loaded {
        app.output.success(&format!("{} is loaded", app.layout.label));
    } else {
        app.output.warn(&format!("{} is not loaded", app.layout.label));
    }
    if let Some(snapshot) = snapshot {
        app.output.kv("pid ", &describe(snapshot.pid));
        app.output.kv("port", &describe(snapshot.port));
        app.output.kv("bind", snapshot.bind.as_deref().unwrap_or("-"));
    }
    Ok(())
}

fn describe<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
