//! `gatewayctl enable` — install the launch agent and start the gateway.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::launch_agent::Reconcile;
use crate::commands::GatewayArgs;
use crate::output::json;

/// Run the enable command.
///
/// # Errors
///
/// Returns an error if the bundle has no gateway executable or launchd
/// refuses to bootstrap the job.
pub async fn run(app: &AppContext, args: GatewayArgs) -> Result<()> {
    let bundle = args.gateway_bundle();
    let service = app.launch_agent(args.project_root);
    let outcome = service.enable(&bundle, args.port).await?;

    if app.is_json() {
        return json::print(&serde_json::json!({
            "enabled": true,
            "outcome": outcome_code(outcome),
            "label": app.layout.label,
            "manifest": app.layout.manifest_path(),
            "port": args.port,
        }));
    }

    match outcome {
        Reconcile::AlreadyLoaded => app
            .output
            .success("Gateway already running with the desired settings; kickstarted"),
        Reconcile::Bootstrapped | Reconcile::Disabled => {
            app.output.success("Gateway launch agent installed");
        }
    }
    app.output
        .kv("manifest", &app.layout.manifest_path().display().to_string());
    Ok(())
}

fn outcome_code(outcome: Reconcile) -> &'static str {
    match outcome {
        Reconcile::AlreadyLoaded => "already_loaded",
        Reconcile::Bootstrapped => "bootstrapped",
        Reconcile::Disabled => "disabled",
    }
}
