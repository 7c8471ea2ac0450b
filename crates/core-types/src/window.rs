use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed December-through-March interval analyzed for one season.
///
/// Identity is the opening year: the window for year `Y` spans the half-open
/// interval `[Dec 1 of Y, Mar 1 of Y+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    opening_year: i32,
}

impl SeasonWindow {
    pub fn new(opening_year: i32) -> Self {
        Self { opening_year }
    }

    /// Every window from `start_year` through `end_year` inclusive, in
    /// chronological order.
    pub fn series(start_year: i32, end_year: i32) -> impl Iterator<Item = SeasonWindow> {
        (start_year..=end_year).map(SeasonWindow::new)
    }

    pub fn opening_year(&self) -> i32 {
        self.opening_year
    }

    /// Dec 1 of the opening year (inclusive bound).
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.opening_year, 12, 1).unwrap()
    }

    /// Mar 1 of the following year (exclusive bound).
    pub fn end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.opening_year + 1, 3, 1).unwrap()
    }

    /// Display label in `"YYYY-YY"` form, e.g. `"2020-21"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{:02}",
            self.opening_year,
            (self.opening_year + 1).rem_euclid(100)
        )
    }
}

/// Per-window performance record produced by the seasonality analysis.
///
/// Serialized field names match the public API's response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonResult {
    #[serde(rename = "year")]
    pub label: String,
    #[serde(rename = "return")]
    pub percent_return: Decimal,
    #[serde(rename = "drawdown")]
    pub max_drawdown_pct: Decimal,
    #[serde(rename = "volatility")]
    pub annualized_volatility_pct: Decimal,
    #[serde(rename = "startPrice")]
    pub start_price: Decimal,
    #[serde(rename = "endPrice")]
    pub end_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds_span_december_through_february() {
        let window = SeasonWindow::new(2020);
        assert_eq!(window.start(), NaiveDate::from_ymd_opt(2020, 12, 1).unwrap());
        assert_eq!(window.end(), NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    }

    #[test]
    fn label_zero_pads_the_closing_year() {
        assert_eq!(SeasonWindow::new(2020).label(), "2020-21");
        assert_eq!(SeasonWindow::new(1999).label(), "1999-00");
        assert_eq!(SeasonWindow::new(2008).label(), "2008-09");
    }

    #[test]
    fn series_is_chronological_and_inclusive() {
        let years: Vec<i32> = SeasonWindow::series(2016, 2024)
            .map(|w| w.opening_year())
            .collect();
        assert_eq!(years, (2016..=2024).collect::<Vec<_>>());
        assert_eq!(years.len(), 9);
    }
}
