use std::collections::BTreeMap;

use chrono::{Duration, Months, NaiveDate, Utc};

use crate::models::{RiskCounts, TrendPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// The date `steps` intervals before `origin`.
    fn back(&self, origin: NaiveDate, steps: u32) -> NaiveDate {
        match self {
            Granularity::Daily => origin - Duration::days(steps as i64),
            Granularity::Weekly => origin - Duration::weeks(steps as i64),
            Granularity::Monthly => origin
                .checked_sub_months(Months::new(steps))
                .unwrap_or(origin),
        }
    }
}

/// A source of historical per-risk counts. Real deployments back this with
/// a metrics store; the collector itself only needs the seam.
pub trait HistorySource {
    /// Recorded counts for dates within the inclusive range. Dates with no
    /// recorded history may be omitted.
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, RiskCounts>;
}

/// Fallback used when no history store is wired in: every date reads zero.
pub struct ZeroHistory;

impl HistorySource for ZeroHistory {
    fn fetch(&self, _start: NaiveDate, _end: NaiveDate) -> BTreeMap<NaiveDate, RiskCounts> {
        BTreeMap::new()
    }
}

/// Builds a trend series of exactly `window` points ending at the current
/// date, ascending. Dates the source has no record for read as zero.
pub fn build_trend(
    source: &dyn HistorySource,
    granularity: Granularity,
    window: usize,
) -> Vec<TrendPoint> {
    let today = Utc::now().date_naive();
    let mut dates: Vec<NaiveDate> = (0..window as u32)
        .map(|i| granularity.back(today, i))
        .collect();
    dates.reverse();

    let history = match dates.first() {
        Some(start) => source.fetch(*start, today),
        None => BTreeMap::new(),
    };

    dates
        .into_iter()
        .map(|date| TrendPoint {
            date,
            counts: history.get(&date).copied().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_history_seven_daily_points() {
        let points = build_trend(&ZeroHistory, Granularity::Daily, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points.last().unwrap().date, Utc::now().date_naive());
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert!(points.iter().all(|p| p.counts == RiskCounts::default()));
    }

    #[test]
    fn test_weekly_and_monthly_dates_strictly_increase() {
        for granularity in [Granularity::Weekly, Granularity::Monthly] {
            let points = build_trend(&ZeroHistory, granularity, 6);
            assert_eq!(points.len(), 6);
            for pair in points.windows(2) {
                assert!(pair[0].date < pair[1].date);
            }
        }
    }

    #[test]
    fn test_injected_history_source_is_used() {
        struct Fixed;
        impl HistorySource for Fixed {
            fn fetch(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, RiskCounts> {
                // Only yesterday has a record.
                let mut map = BTreeMap::new();
                let yesterday = end - Duration::days(1);
                if yesterday >= start {
                    map.insert(yesterday, RiskCounts { high: 3, ..Default::default() });
                }
                map
            }
        }

        let points = build_trend(&Fixed, Granularity::Daily, 3);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].counts.high, 3);
        assert_eq!(points[0].counts, RiskCounts::default());
        assert_eq!(points[2].counts, RiskCounts::default());
    }

    #[test]
    fn test_empty_window_yields_no_points() {
        assert!(build_trend(&ZeroHistory, Granularity::Daily, 0).is_empty());
    }
}
