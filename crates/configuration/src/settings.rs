use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub market_data: MarketDataConfig,
    pub analysis: AnalysisConfig,
}

/// Network settings for the query service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind, e.g. "0.0.0.0".
    pub host: String,
    pub port: u16,
}

/// Settings for the upstream market-data venue.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDataConfig {
    /// Base URL of the venue's public REST API.
    pub base_url: String,
    /// Quote asset appended to bare tickers, e.g. "USDT" maps "BTC" to "BTCUSDT".
    pub quote_suffix: String,
}

/// Defaults for the seasonality analysis itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Opening year of the first season when a request does not name one.
    pub default_start_year: i32,
}
