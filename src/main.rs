use clap::Parser as _;
use dotenvy::dotenv;
use event_relay::cli::{Cli, Commands, RunCmd};
use event_relay::core::config::Config;
use event_relay::relay::RelayWorker;
use event_relay::utils::logging::init_logging;
use event_relay::BridgeResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();
    info!("Starting event relay");
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { run_command } => match run_relay(run_command).await {
            Ok(_) => {
                info!("Event relay shut down cleanly");
            }
            Err(e) => {
                error!(
                    error = %e,
                    error_chain = ?e,
                    "Failed to run event relay"
                );
                panic!("Failed to run event relay: {}", e);
            }
        },
    }
}

async fn run_relay(run_cmd: &RunCmd) -> BridgeResult<()> {
    // Client construction and queue/topic resolution happen once here;
    // a failure at this stage is fatal since no relaying is possible.
    let config = Arc::new(Config::setup(run_cmd).await?);
    debug!("Configuration initialized");

    let cancellation_token = CancellationToken::new();
    let worker = RelayWorker::new(config, cancellation_token.clone());
    let worker_handle = tokio::spawn(async move { worker.run().await });

    tokio::signal::ctrl_c().await.map_err(event_relay::BridgeError::IoError)?;
    info!("Shutdown signal received, stopping relay worker");
    cancellation_token.cancel();

    worker_handle.await.map_err(|e| event_relay::BridgeError::WorkerError(e.to_string()))??;
    info!("Event relay service shutting down");
    Ok(())
}
