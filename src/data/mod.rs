//! Input datasets: GSW zero-coupon yields and the H.15 3-month bill rate.

pub mod gsw;
pub mod h15;

use chrono::NaiveDate;

/// Number of annual maturity points on the zero-coupon curve (1..=10 years).
pub const MATURITY_COUNT: usize = 10;

/// One trading day of the GSW zero-coupon curve. Yields are in percent,
/// indexed by maturity: `yields[0]` is the 1-year yield, `yields[9]` the
/// 10-year. Rows with any missing maturity never make it into this type.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveObservation {
    pub date: NaiveDate,
    pub yields: [f64; MATURITY_COUNT],
}

impl CurveObservation {
    pub fn two_year(&self) -> f64 {
        self.yields[1]
    }

    pub fn ten_year(&self) -> f64 {
        self.yields[9]
    }
}

/// One trading day of the 3-month Treasury bill yield (percent) from H.15.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillObservation {
    pub date: NaiveDate,
    pub y_3month: f64,
}

/// Parse a cell that should hold a yield. Publication files mark missing
/// data with "ND", "NC", "NA" or an empty cell; all of those coerce to None
/// rather than failing the row.
pub(crate) fn parse_yield(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Parse a date cell. GSW uses ISO dates; H.15 exports have shipped both ISO
/// and US-style dates depending on the download path, so accept either.
pub(crate) fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    NaiveDate::parse_from_str(cell, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(cell, "%m/%d/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yield_coerces_markers_to_none() {
        assert_eq!(parse_yield("4.37"), Some(4.37));
        assert_eq!(parse_yield(" 4.37 "), Some(4.37));
        assert_eq!(parse_yield("ND"), None);
        assert_eq!(parse_yield("NC"), None);
        assert_eq!(parse_yield("NA"), None);
        assert_eq!(parse_yield(""), None);
    }

    #[test]
    fn test_parse_date_accepts_both_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(parse_date("2025-01-02"), Some(expected));
        assert_eq!(parse_date("1/2/2025"), Some(expected));
        assert_eq!(parse_date("01/02/2025"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }
}
