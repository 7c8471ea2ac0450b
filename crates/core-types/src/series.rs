use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily observation: the closing price on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

/// A date-ordered, date-indexed sequence of daily closing prices for one symbol.
///
/// The constructor establishes the container invariant: dates are unique and
/// strictly increasing. Range lookups use half-open `[start, end)` semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from points in any order.
    ///
    /// Points are sorted by date. When the same date appears more than once,
    /// the last occurrence wins (upstream feeds occasionally resend a bar).
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by(|next, prev| {
            if next.date == prev.date {
                prev.close = next.close;
                true
            } else {
                false
            }
        });
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns the points whose date satisfies `start <= date < end`.
    ///
    /// The bounds need not coincide with observed dates; an inverted or
    /// non-overlapping interval yields an empty slice.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> &[PricePoint] {
        let lo = self.points.partition_point(|p| p.date < start);
        let hi = self.points.partition_point(|p| p.date < end);
        if lo >= hi {
            &[]
        } else {
            &self.points[lo..hi]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(y: i32, m: u32, d: u32, close: Decimal) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            close,
        }
    }

    #[test]
    fn from_points_sorts_by_date() {
        let series = PriceSeries::from_points(vec![
            point(2021, 1, 3, dec!(30)),
            point(2021, 1, 1, dec!(10)),
            point(2021, 1, 2, dec!(20)),
        ]);
        let closes: Vec<Decimal> = series.iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![dec!(10), dec!(20), dec!(30)]);
    }

    #[test]
    fn from_points_keeps_last_value_for_duplicate_dates() {
        let series = PriceSeries::from_points(vec![
            point(2021, 1, 1, dec!(10)),
            point(2021, 1, 2, dec!(20)),
            point(2021, 1, 1, dec!(15)),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().close, dec!(15));
    }

    #[test]
    fn range_is_half_open() {
        let series = PriceSeries::from_points(vec![
            point(2020, 12, 1, dec!(100)),
            point(2021, 1, 15, dec!(120)),
            point(2021, 3, 1, dec!(90)),
        ]);
        let slice = series.range(
            NaiveDate::from_ymd_opt(2020, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        );
        // Mar 1 sits on the excluded end bound.
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].close, dec!(100));
        assert_eq!(slice[1].close, dec!(120));
    }

    #[test]
    fn range_with_no_overlap_is_empty() {
        let series = PriceSeries::from_points(vec![point(2021, 6, 1, dec!(50))]);
        let slice = series.range(
            NaiveDate::from_ymd_opt(2021, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        );
        assert!(slice.is_empty());
    }

    #[test]
    fn range_with_inverted_bounds_is_empty() {
        let series = PriceSeries::from_points(vec![point(2021, 1, 1, dec!(50))]);
        let slice = series.range(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        );
        assert!(slice.is_empty());
    }
}
