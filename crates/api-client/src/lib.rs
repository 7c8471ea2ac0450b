use crate::error::ApiError;
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use configuration::settings::MarketDataConfig;
use core_types::{PricePoint, PriceSeries};
use rust_decimal::Decimal;
use std::str::FromStr;

pub mod error;
pub mod responses;

// --- Public API ---
pub use responses::VenueErrorResponse;

/// The venue's hard cap on bars per kline request.
const KLINE_BATCH_LIMIT: usize = 1000;

/// The generic, abstract interface for a daily market-data source.
///
/// This trait is the contract the query service depends on, allowing the
/// underlying implementation (live or mock) to be swapped out.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetches the daily closing prices for `symbol` over `[start, end]`
    /// (both days inclusive).
    ///
    /// An upstream that has no data for the range returns an empty series,
    /// not an error; `ApiError` means the fetch itself failed.
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, ApiError>;
}

/// A concrete implementation of `MarketDataClient` for the Binance public API.
#[derive(Clone)]
pub struct BinanceClient {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(config: &MarketDataConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches one page of daily klines starting at `start_ms`.
    async fn fetch_kline_batch(
        &self,
        symbol: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<RawKline>, ApiError> {
        let url = format!("{}/api/v3/klines", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", "1d"),
                ("startTime", &start_ms.to_string()),
                ("endTime", &end_ms.to_string()),
                ("limit", &KLINE_BATCH_LIMIT.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<Vec<RawKline>>(&text)
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            let venue_error: VenueErrorResponse = serde_json::from_str(&text).map_err(|e| {
                ApiError::Deserialization(format!(
                    "Failed to deserialize error response: {}. Original text: {}",
                    e, text
                ))
            })?;
            Err(ApiError::Venue(venue_error.code, venue_error.msg))
        }
    }
}

// Intermediate struct for deserializing positional kline arrays from the venue.
#[derive(Debug, serde::Deserialize)]
struct RawKline(
    i64,    // open time (ms)
    String, // open
    String, // high
    String, // low
    String, // close
    String, // volume
    i64,    // close time (ms)
    String, // quote asset volume
    i64,    // number of trades
    String, // taker buy base volume
    String, // taker buy quote volume
    String, // ignored
);

/// Maps one raw kline to the date of its open and its closing price.
fn kline_to_point(raw: &RawKline) -> Result<PricePoint, ApiError> {
    let date = Utc
        .timestamp_millis_opt(raw.0)
        .single()
        .ok_or_else(|| ApiError::InvalidData(format!("Invalid open time: {}", raw.0)))?
        .date_naive();
    let close =
        Decimal::from_str(&raw.4).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    Ok(PricePoint { date, close })
}

#[async_trait]
impl MarketDataClient for BinanceClient {
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, ApiError> {
        let mut start_ms = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis();
        let end_ms = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp_millis();

        let mut points = Vec::new();
        while start_ms <= end_ms {
            let batch = self.fetch_kline_batch(symbol, start_ms, end_ms).await?;
            let last_open_ms = match batch.last() {
                Some(kline) => kline.0,
                None => break,
            };

            for raw in &batch {
                points.push(kline_to_point(raw)?);
            }

            if batch.len() < KLINE_BATCH_LIMIT {
                break;
            }
            // Resume just past the last bar we have.
            start_ms = last_open_ms + 1;
        }

        tracing::debug!(symbol, bars = points.len(), "fetched daily closes");
        Ok(PriceSeries::from_points(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw_kline(open_ms: i64, close: &str) -> RawKline {
        RawKline(
            open_ms,
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            close.to_string(),
            "0".to_string(),
            open_ms + 86_399_999,
            "0".to_string(),
            0,
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
        )
    }

    #[test]
    fn kline_maps_to_open_date_and_close_price() {
        // 2020-12-01T00:00:00Z
        let point = kline_to_point(&raw_kline(1_606_780_800_000, "19700.55")).unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2020, 12, 1).unwrap());
        assert_eq!(point.close, dec!(19700.55));
    }

    #[test]
    fn unparseable_close_is_a_deserialization_error() {
        let result = kline_to_point(&raw_kline(1_606_780_800_000, "not-a-price"));
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[test]
    fn venue_error_payload_deserializes() {
        let err: VenueErrorResponse =
            serde_json::from_str(r#"{"code":-1121,"msg":"Invalid symbol."}"#).unwrap();
        assert_eq!(err.code, -1121);
        assert_eq!(err.msg, "Invalid symbol.");
    }
}
