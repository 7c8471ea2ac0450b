use api_client::MarketDataClient;
use configuration::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use axum::{routing::get, Router};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Built exactly once at startup from explicit configuration; nothing here is
/// registered at module level.
#[derive(Clone)]
pub struct AppState {
    pub market_data: Arc<dyn MarketDataClient>,
    /// Quote asset appended to bare tickers before the upstream fetch.
    pub quote_suffix: String,
    /// Opening year of the first season when a request does not name one.
    pub default_start_year: i32,
}

/// Builds the application router around the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    // The analysis results are consumed by browser dashboards on other
    // origins, so cross-origin access is wide open.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/crypto-analysis/:symbol",
            get(handlers::get_crypto_analysis),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the query service.
pub async fn run_server(
    addr: SocketAddr,
    config: Config,
    market_data: Arc<dyn MarketDataClient>,
) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState {
        market_data,
        quote_suffix: config.market_data.quote_suffix.clone(),
        default_start_year: config.analysis.default_start_year,
    });

    let app = build_router(app_state);

    tracing::info!("Query service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
