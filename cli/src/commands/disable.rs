//! `gatewayctl disable` — boot out the job and remove its manifest.

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Run the disable command. Supervisor failures are logged, never returned.
///
/// # Errors
///
/// Returns an error only if JSON output cannot be serialized.
pub async fn run(app: &AppContext) -> Result<()> {
    app.launch_agent(None).disable().await;

    if app.is_json() {
        return json::print(&serde_json::json!({
            "enabled": false,
            "label": app.layout.label,
        }));
    }
    app.output.success("Gateway launch agent removed");
    Ok(())
}
