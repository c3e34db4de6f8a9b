//! The batch pipeline: Load → Merge/Filter → Derive.
//!
//! Everything downstream (chart, summary) consumes the `SpreadSeries` this
//! module produces.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::data::{gsw, h15, BillObservation, CurveObservation};
use crate::engine::forward;

/// One derived point: both indicators for one trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadPoint {
    pub date: NaiveDate,
    /// 10-year minus 2-year zero-coupon yield, percentage points.
    pub spread_2_10: f64,
    /// Near-term forward spread, percentage points.
    pub ntfs: f64,
}

/// The derived indicator series, ascending by date, never empty.
#[derive(Debug, Clone)]
pub struct SpreadSeries {
    pub points: Vec<SpreadPoint>,
}

impl SpreadSeries {
    /// The most recent point (the series is never constructed empty).
    pub fn latest(&self) -> &SpreadPoint {
        self.points.last().expect("SpreadSeries is never empty")
    }

    pub fn first_date(&self) -> NaiveDate {
        self.points.first().expect("SpreadSeries is never empty").date
    }
}

/// Run the whole batch pass: load both files, join on date, apply the
/// trailing window ending at `today`, and derive both indicators per row.
pub fn run(config: &Config, today: NaiveDate) -> Result<SpreadSeries> {
    let curves = gsw::load(&config.data.gsw_path, config.data.gsw_skip_rows)?;
    let bills = h15::load(
        &config.data.h15_path,
        config.data.h15_skip_rows,
        config.data.h15_series_column.as_deref(),
    )?;
    tracing::info!(curve_rows = curves.len(), bill_rows = bills.len(), "datasets loaded");

    let cutoff = today - chrono::Duration::days(config.window.lookback_days);
    derive(&curves, &bills, cutoff)
}

/// Inner-join curves and bills on date, keep dates on or after `cutoff`
/// (closed lower bound), and compute both spreads per surviving row.
pub fn derive(
    curves: &[CurveObservation],
    bills: &[BillObservation],
    cutoff: NaiveDate,
) -> Result<SpreadSeries> {
    let bills_by_date: BTreeMap<NaiveDate, f64> =
        bills.iter().map(|b| (b.date, b.y_3month)).collect();

    let mut points = Vec::new();
    for curve in curves {
        if curve.date < cutoff {
            continue;
        }
        let Some(&y_3month) = bills_by_date.get(&curve.date) else {
            continue;
        };

        let ntfs = forward::ntfs(curve, y_3month)
            .with_context(|| format!("Spline failed for {}", curve.date))?;

        points.push(SpreadPoint {
            date: curve.date,
            spread_2_10: curve.ten_year() - curve.two_year(),
            ntfs,
        });
    }

    if points.is_empty() {
        bail!("no overlapping observations on or after {}", cutoff);
    }

    points.sort_by_key(|p| p.date);
    tracing::info!(
        points = points.len(),
        first = %points[0].date,
        last = %points[points.len() - 1].date,
        "derived spread series"
    );
    Ok(SpreadSeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MATURITY_COUNT;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn flat_curve(date: NaiveDate, level: f64) -> CurveObservation {
        CurveObservation { date, yields: [level; MATURITY_COUNT] }
    }

    fn linear_curve(date: NaiveDate) -> CurveObservation {
        // y(m) = 3 + 0.1m: reproduced exactly by the spline.
        CurveObservation {
            date,
            yields: core::array::from_fn(|i| 3.0 + 0.1 * (i as f64 + 1.0)),
        }
    }

    #[test]
    fn test_inner_join_drops_unmatched_dates() {
        let curves = vec![
            flat_curve(date(2025, 6, 2), 4.0),
            flat_curve(date(2025, 6, 3), 4.0), // no bill this day
            flat_curve(date(2025, 6, 4), 4.0),
        ];
        let bills = vec![
            BillObservation { date: date(2025, 6, 2), y_3month: 4.0 },
            BillObservation { date: date(2025, 6, 4), y_3month: 4.0 },
            BillObservation { date: date(2025, 6, 5), y_3month: 4.0 }, // no curve this day
        ];
        let series = derive(&curves, &bills, date(2025, 1, 1)).unwrap();
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].date, date(2025, 6, 2));
        assert_eq!(series.points[1].date, date(2025, 6, 4));
    }

    #[test]
    fn test_cutoff_is_a_closed_lower_bound() {
        let cutoff = date(2025, 6, 3);
        let curves = vec![
            flat_curve(date(2025, 6, 2), 4.0), // one day before: excluded
            flat_curve(date(2025, 6, 3), 4.0), // exactly at cutoff: kept
            flat_curve(date(2025, 6, 4), 4.0),
        ];
        let bills: Vec<_> = curves
            .iter()
            .map(|c| BillObservation { date: c.date, y_3month: 4.0 })
            .collect();
        let series = derive(&curves, &bills, cutoff).unwrap();
        assert_eq!(series.first_date(), cutoff);
        assert_eq!(series.points.len(), 2);
    }

    #[test]
    fn test_spread_2_10_is_ten_minus_two() {
        let mut curve = flat_curve(date(2025, 6, 2), 4.0);
        curve.yields[1] = 3.8; // 2y
        curve.yields[9] = 4.5; // 10y
        let bills = vec![BillObservation { date: curve.date, y_3month: 4.0 }];
        let series = derive(&[curve], &bills, date(2025, 1, 1)).unwrap();
        assert!((series.latest().spread_2_10 - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_ntfs_on_linear_curve() {
        // y(1.5)=3.15, y(1.75)=3.175 → fwd = 7*3.175 - 6*3.15 = 3.325;
        // ntfs = 3.325 - 3.10 = 0.225
        let curve = linear_curve(date(2025, 6, 2));
        let bills = vec![BillObservation { date: curve.date, y_3month: 3.10 }];
        let series = derive(&[curve], &bills, date(2025, 1, 1)).unwrap();
        assert!((series.latest().ntfs - 0.225).abs() < 1e-9);
    }

    #[test]
    fn test_flat_curve_has_zero_ntfs_against_same_bill() {
        let curve = flat_curve(date(2025, 6, 2), 4.25);
        let bills = vec![BillObservation { date: curve.date, y_3month: 4.25 }];
        let series = derive(&[curve], &bills, date(2025, 1, 1)).unwrap();
        assert!(series.latest().ntfs.abs() < 1e-9);
        assert!(series.latest().spread_2_10.abs() < 1e-12);
    }

    #[test]
    fn test_empty_window_is_an_error() {
        let curves = vec![flat_curve(date(2024, 1, 2), 4.0)];
        let bills = vec![BillObservation { date: date(2024, 1, 2), y_3month: 4.0 }];
        let err = derive(&curves, &bills, date(2025, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("no overlapping observations"));
    }

    #[test]
    fn test_points_come_out_date_ordered() {
        let curves = vec![
            flat_curve(date(2025, 6, 4), 4.0),
            flat_curve(date(2025, 6, 2), 4.0),
            flat_curve(date(2025, 6, 3), 4.0),
        ];
        let bills: Vec<_> = curves
            .iter()
            .map(|c| BillObservation { date: c.date, y_3month: 4.0 })
            .collect();
        let series = derive(&curves, &bills, date(2025, 1, 1)).unwrap();
        let dates: Vec<_> = series.points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2025, 6, 2), date(2025, 6, 3), date(2025, 6, 4)]);
    }
}
