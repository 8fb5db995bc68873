//! `gatewayctl kickstart` — force-restart the gateway job.

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Run the kickstart command.
///
/// # Errors
///
/// Returns an error only if JSON output cannot be serialized.
pub async fn run(app: &AppContext) -> Result<()> {
    app.launch_agent(None).kickstart().await;

    if app.is_json() {
        return json::print(&serde_json::json!({ "kickstarted": app.layout.label }));
    }
    app.output.success("Gateway restart requested");
    Ok(())
}
