mod cases;
mod config;
mod error;
mod runner;
mod translate;
mod utils;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use config::ProbeConfig;
use runner::Runner;
use translate::TranslateClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transflow_probe=info".into()),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").ok();
    let (config, loaded_path) = ProbeConfig::resolve(config_path.as_deref())?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file found, using defaults"),
    }
    info!(
        "Probing {} (target language {}, timeout {} ms)",
        config.api_url, config.target_lang, config.timeout_ms
    );

    let client = TranslateClient::new(&config)?;
    let mut runner = Runner::new(Arc::new(client), config, std::io::stdout());
    runner.run().await?;

    Ok(())
}
