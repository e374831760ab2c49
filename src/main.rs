//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Reads commands from stdin and prints results to stdout. Logs go to
//! stderr.

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, CommandTable, Config, Dispatcher, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Build the tokio runtime
/// 3. Load configuration from environment variables
/// 4. Create the session (HTTP client, cache and its sweep task, registry)
/// 5. Run the REPL until `exit`, end of input, or Ctrl+C
/// 6. Stop the cache sweep task
fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build the tokio runtime")?;

    let result = runtime.block_on(serve());

    // Stdin is read on a blocking thread that cannot be interrupted, so the
    // runtime must not wait for it after Ctrl+C
    runtime.shutdown_background();
    result
}

async fn serve() -> anyhow::Result<()> {
    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_interval={}s, page_size={}, request_timeout={}s",
        config.api_base_url, config.cache_interval, config.page_size, config.request_timeout
    );

    let session = Session::from_config(&config).context("failed to start the Pokedex session")?;
    let mut dispatcher = Dispatcher::new(CommandTable::standard(), session);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    repl::run_until(&mut dispatcher, stdin, stdout, ctrl_c())
        .await
        .context("failed to read or write the terminal")?;

    dispatcher.into_session().shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}

async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down..."),
        Err(err) => {
            warn!(error = %err, "Unable to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
