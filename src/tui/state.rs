//! Chart-ready view of the derived series.

use chrono::NaiveDate;

use crate::pipeline::SpreadSeries;

/// Everything the renderer needs, precomputed once: ratatui's `Chart` wants
/// `(f64, f64)` slices and explicit bounds, so dates become day offsets from
/// the first point.
#[derive(Debug, Clone)]
pub struct ChartState {
    pub spread_2_10: Vec<(f64, f64)>,
    pub ntfs: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// First / middle / last date of the window, for the x axis.
    pub x_labels: [String; 3],
    pub latest_date: NaiveDate,
    pub latest_spread_2_10: f64,
    pub latest_ntfs: f64,
}

impl ChartState {
    pub fn new(series: &SpreadSeries) -> Self {
        let first = series.first_date();
        let day = |d: NaiveDate| (d - first).num_days() as f64;

        let spread_2_10: Vec<(f64, f64)> =
            series.points.iter().map(|p| (day(p.date), p.spread_2_10)).collect();
        let ntfs: Vec<(f64, f64)> =
            series.points.iter().map(|p| (day(p.date), p.ntfs)).collect();

        let latest = series.latest();
        let x_max = day(latest.date).max(1.0);

        // Y range covers both series and the zero baseline, with headroom.
        let mut y_min = 0.0f64;
        let mut y_max = 0.0f64;
        for &(_, y) in spread_2_10.iter().chain(&ntfs) {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let pad = ((y_max - y_min) * 0.1).max(0.1);

        let mid = series.points[series.points.len() / 2].date;
        let label = |d: NaiveDate| d.format("%b %d, %Y").to_string();

        Self {
            spread_2_10,
            ntfs,
            x_bounds: [0.0, x_max],
            y_bounds: [y_min - pad, y_max + pad],
            x_labels: [label(first), label(mid), label(latest.date)],
            latest_date: latest.date,
            latest_spread_2_10: latest.spread_2_10,
            latest_ntfs: latest.ntfs,
        }
    }
}
