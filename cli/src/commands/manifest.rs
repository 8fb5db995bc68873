//! `gatewayctl manifest` — print the manifest `enable` would install.

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::GatewayArgs;
use crate::output::json;

/// Run the manifest command. Touches neither disk nor launchd.
///
/// # Errors
///
/// Returns an error only if JSON output cannot be serialized.
pub fn run(app: &AppContext, args: GatewayArgs) -> Result<()> {
    let bundle = args.gateway_bundle();
    let manifest = app
        .launch_agent(args.project_root)
        .render_manifest(&bundle, args.port);

    if app.is_json() {
        return json::print(&serde_json::json!({
            "path": app.layout.manifest_path(),
            "manifest": manifest,
        }));
    }
    print!("{manifest}");
    Ok(())
}
