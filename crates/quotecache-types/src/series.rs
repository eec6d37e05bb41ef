//! Date-indexed price series.

use chrono::NaiveDate;

use crate::PriceBar;

/// A table of daily price bars for one ticker, ordered and keyed by date.
///
/// The constructor sorts rows ascending by date, so the ordering invariant
/// holds regardless of whether the series came from a remote fetch or was
/// read back from a cache file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self { bars: Vec::new() }
    }

    /// Creates a series from unordered bars, sorting them by date.
    #[must_use]
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|bar| bar.date);
        Self { bars }
    }

    /// Returns the bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the series has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Looks up the bar for a specific trading day.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&PriceBar> {
        self.bars
            .binary_search_by_key(&date, |bar| bar.date)
            .ok()
            .map(|idx| &self.bars[idx])
    }

    /// Returns the earliest bar.
    #[must_use]
    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    /// Returns the latest bar.
    #[must_use]
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Returns the earliest trading day in the series.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.first().map(|bar| bar.date)
    }

    /// Returns the latest trading day in the series.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.last().map(|bar| bar.date)
    }

    /// Returns an iterator over the trading days in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.iter().map(|bar| bar.date)
    }

    /// Returns an iterator over the bars in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, PriceBar> {
        self.bars.iter()
    }
}

impl IntoIterator for PriceSeries {
    type Item = PriceBar;
    type IntoIter = std::vec::IntoIter<PriceBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceBar;
    type IntoIter = std::slice::Iter<'a, PriceBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: NaiveDate, close: f64) -> PriceBar {
        PriceBar::new(date, close, close, close, close, 1_000, 0.0, 0.0)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_from_bars_sorts_by_date() {
        let series = PriceSeries::from_bars(vec![
            bar(day(3), 103.0),
            bar(day(1), 101.0),
            bar(day(2), 102.0),
        ]);

        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
        assert_eq!(series.start_date(), Some(day(1)));
        assert_eq!(series.end_date(), Some(day(3)));
    }

    #[test]
    fn test_get_by_date() {
        let series = PriceSeries::from_bars(vec![bar(day(1), 101.0), bar(day(3), 103.0)]);

        assert_eq!(series.get(day(3)).map(|b| b.close), Some(103.0));
        assert!(series.get(day(2)).is_none());
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
        assert!(series.start_date().is_none());
    }

    #[test]
    fn test_iteration() {
        let series = PriceSeries::from_bars(vec![bar(day(2), 102.0), bar(day(1), 101.0)]);

        let closes: Vec<f64> = series.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![101.0, 102.0]);

        let owned: Vec<PriceBar> = series.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
