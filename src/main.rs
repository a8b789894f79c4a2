use dotenv_flow::dotenv_flow;
use eyre::{bail, Result};
use ssi_did::methods::{DIDResolver, DidWebConfig, MethodRegistry};
use tracing::{error, info};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    // Enable logging
    config_tracing();

    let dids: Vec<String> = std::env::args().skip(1).collect();
    if dids.is_empty() {
        bail!("usage: did-resolve <did> [<did> ...]");
    }

    let registry = MethodRegistry::with_default_methods(DidWebConfig::from_env()?)?;

    let mut failures = 0;
    for did in &dids {
        match registry.resolve(did).await {
            Ok(diddoc) => {
                info!("resolved {did}");
                println!("{}", serde_json::to_string_pretty(&diddoc)?);
            }
            Err(err) => {
                error!("could not resolve {did}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} DIDs could not be resolved", dids.len());
    }

    Ok(())
}

fn config_tracing() {
    // Documents go to stdout, logs to stderr
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("hyper::proto", tracing::Level::INFO)
        .with_target("hyper_util", tracing::Level::INFO)
        .with_default(tracing::Level::DEBUG);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
