//! gatewayctl - manage the gateway launch agent

use clap::Parser;
use gatewayctl::cli::Cli;
use gatewayctl::domain::LaunchAgentError;
use gatewayctl::output::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        if json_mode {
            let code = e
                .downcast_ref::<LaunchAgentError>()
                .map_or("error", LaunchAgentError::code);
            match json::format_error(&format!("{e:#}"), code) {
                Ok(out) => println!("{out}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or everything
/// from this crate with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "gatewayctl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
