use api_client::BinanceClient;
use std::net::SocketAddr;
use std::sync::Arc;

// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to wire the configuration and client into `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let market_data = Arc::new(BinanceClient::new(&config.market_data));
    web_server::run_server(addr, config, market_data).await
}
