use crate::error::AnalyzerError;
use chrono::{Datelike, NaiveDate};
use core_types::{PricePoint, PriceSeries, SeasonResult, SeasonWindow};
use rust_decimal::{Decimal, MathematicalOps};

pub mod error;

/// Trading days per year, used to annualize daily volatility.
const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Decimal places kept in every numeric output field.
const OUTPUT_PRECISION: u32 = 2;

/// The seasonality analysis engine.
///
/// Stateless and pure: `analyze` is a deterministic function of its inputs,
/// performs no I/O, and owns no mutable state, so concurrent calls need no
/// synchronization.
#[derive(Debug, Default)]
pub struct SeasonalityAnalyzer {}

impl SeasonalityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes one `SeasonResult` per December–March window opening between
    /// `start_year` and `as_of`'s year inclusive, in chronological order.
    ///
    /// Windows without any price data are dropped rather than emitted as
    /// zero rows. An empty `series` yields an empty result list, not an
    /// error: upstream "no data at all" deliberately degrades to an empty
    /// report. A window whose metrics are mathematically undefined (zero
    /// divisor) fails with `AnalyzerError::DegenerateWindow` instead of
    /// leaking infinities into the output.
    pub fn analyze(
        &self,
        series: &PriceSeries,
        start_year: i32,
        as_of: NaiveDate,
    ) -> Result<Vec<SeasonResult>, AnalyzerError> {
        if start_year <= 0 || start_year > as_of.year() {
            return Err(AnalyzerError::InvalidStartYear {
                start_year,
                as_of_year: as_of.year(),
            });
        }

        if series.is_empty() {
            tracing::warn!("empty price series, degrading to an empty seasonality report");
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for window in SeasonWindow::series(start_year, as_of.year()) {
            let slice = series.range(window.start(), window.end());
            if slice.is_empty() {
                continue;
            }
            results.push(analyze_window(&window, slice)?);
        }

        Ok(results)
    }
}

/// Computes the full metric row for one non-empty window slice.
fn analyze_window(
    window: &SeasonWindow,
    slice: &[PricePoint],
) -> Result<SeasonResult, AnalyzerError> {
    let start_price = slice[0].close;
    let end_price = slice[slice.len() - 1].close;

    if start_price.is_zero() {
        return Err(AnalyzerError::DegenerateWindow {
            label: window.label(),
            reason: "start price is zero, percent return is undefined".to_string(),
        });
    }

    let percent_return = (end_price - start_price) / start_price * Decimal::ONE_HUNDRED;
    let returns = daily_returns(window, slice)?;

    Ok(SeasonResult {
        label: window.label(),
        percent_return: percent_return.round_dp(OUTPUT_PRECISION),
        max_drawdown_pct: max_drawdown_pct(slice).round_dp(OUTPUT_PRECISION),
        annualized_volatility_pct: annualized_volatility_pct(&returns)?
            .round_dp(OUTPUT_PRECISION),
        start_price: start_price.round_dp(OUTPUT_PRECISION),
        end_price: end_price.round_dp(OUTPUT_PRECISION),
    })
}

/// Largest peak-to-trough decline within the slice, as a percentage of the
/// running peak. A single-point slice has no decline and yields zero.
///
/// The running peak is at least the start price, which the caller has already
/// checked is nonzero, so the division is always defined.
fn max_drawdown_pct(slice: &[PricePoint]) -> Decimal {
    let mut peak = slice[0].close;
    let mut max_drawdown = Decimal::ZERO;

    for point in slice {
        if point.close > peak {
            peak = point.close;
        }
        let drawdown = (peak - point.close) / peak * Decimal::ONE_HUNDRED;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    max_drawdown
}

/// Daily simple returns between consecutive closes. Empty for a single-point
/// slice. A zero close anywhere but the last position would divide the next
/// day's return by zero, so it fails the window instead.
fn daily_returns(
    window: &SeasonWindow,
    slice: &[PricePoint],
) -> Result<Vec<Decimal>, AnalyzerError> {
    slice
        .windows(2)
        .map(|pair| {
            if pair[0].close.is_zero() {
                Err(AnalyzerError::DegenerateWindow {
                    label: window.label(),
                    reason: format!("close on {} is zero, daily return is undefined", pair[0].date),
                })
            } else {
                Ok((pair[1].close - pair[0].close) / pair[0].close)
            }
        })
        .collect()
}

/// Sample standard deviation of daily returns, annualized by sqrt(252) and
/// expressed as a percentage. Fewer than two observations leave the standard
/// deviation undefined; that case is defined as zero.
fn annualized_volatility_pct(returns: &[Decimal]) -> Result<Decimal, AnalyzerError> {
    if returns.len() < 2 {
        return Ok(Decimal::ZERO);
    }

    let count = Decimal::from(returns.len());
    let mean = returns.iter().sum::<Decimal>() / count;
    let variance = returns
        .iter()
        .map(|r| (*r - mean) * (*r - mean))
        .sum::<Decimal>()
        / Decimal::from(returns.len() - 1);

    if variance <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let std_dev = variance.sqrt().ok_or_else(|| {
        AnalyzerError::Calculation("failed to take the square root of the variance".to_string())
    })?;
    let annualization = Decimal::from(TRADING_DAYS_PER_YEAR).sqrt().ok_or_else(|| {
        AnalyzerError::Calculation("failed to compute the annualization factor".to_string())
    })?;

    Ok(std_dev * Decimal::ONE_HUNDRED * annualization)
}
