use crate::{error::AppError, AppState};
use analyzer::SeasonalityAnalyzer;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use core_types::SeasonResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest ticker accepted on the request path.
const MAX_SYMBOL_LEN: usize = 20;

/// Query parameters for the analysis endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    /// Opening year of the first season; falls back to the configured default.
    pub start_year: Option<i32>,
}

/// Response envelope for the analysis endpoint.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub data: Vec<SeasonResult>,
}

/// # GET /api/crypto-analysis/:symbol
///
/// Maps the bare ticker to the venue's symbol format, fetches daily closes
/// from January 1 of the start year through today, and returns the per-season
/// report. An unavailable upstream degrades to an empty `data` list; the
/// degradation is logged, never silent.
pub async fn get_crypto_analysis(
    Path(symbol): Path<String>,
    Query(query): Query<AnalysisQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let ticker = validate_symbol(&symbol)?;
    let venue_symbol = format!("{}{}", ticker, state.quote_suffix);

    let start_year = query.start_year.unwrap_or(state.default_start_year);
    let today = Utc::now().date_naive();
    let fetch_start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or(AppError::InvalidStartYear(start_year))?;

    let series = match state
        .market_data
        .fetch_daily_closes(&venue_symbol, fetch_start, today)
        .await
    {
        Ok(series) => series,
        Err(e) => {
            tracing::warn!(
                symbol = %venue_symbol,
                error = %e,
                "market data unavailable, returning an empty report"
            );
            return Ok(Json(AnalysisResponse { data: Vec::new() }));
        }
    };

    let data = SeasonalityAnalyzer::new().analyze(&series, start_year, today)?;
    Ok(Json(AnalysisResponse { data }))
}

/// Accepts a bare alphanumeric ticker and normalizes it to uppercase.
fn validate_symbol(symbol: &str) -> Result<String, AppError> {
    if symbol.is_empty()
        || symbol.len() > MAX_SYMBOL_LEN
        || !symbol.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol.to_ascii_uppercase())
}
