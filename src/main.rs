use anyhow::Context;
use api_client::BinanceClient;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Solstice seasonality service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file when one is present.
    dotenvy::dotenv().ok();
    init_tracing()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A seasonal performance statistics service for crypto assets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP query service.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Override the listen address from config.toml (format: "host:port").
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

/// Wires configuration, the market-data client, and the web server together.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = configuration::load_config().context("failed to load config.toml")?;

    let addr = match args.addr {
        Some(addr) => addr,
        None => SocketAddr::new(
            config
                .server
                .host
                .parse()
                .context("invalid server.host in config.toml")?,
            config.server.port,
        ),
    };

    let market_data = Arc::new(BinanceClient::new(&config.market_data));
    web_server::run_server(addr, config, market_data).await
}

/// Installs the global tracing subscriber, honoring RUST_LOG when set.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
