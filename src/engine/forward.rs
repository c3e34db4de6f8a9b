//! Near-term forward spread arithmetic.
//!
//! The NTFS compares a model-implied short rate six quarters ahead against
//! the current 3-month bill. The implied rate comes out of the zero curve:
//! if y(t) is the zero-coupon yield to maturity t (in years), the 1-quarter
//! forward rate starting at t = 1.5 is
//!
//! ```text
//! fwd = (1.75 * y(1.75) - 1.5 * y(1.5)) / 0.25 = 7*y(1.75) - 6*y(1.5)
//! ```

use anyhow::Result;

use super::spline::CubicSpline;
use crate::data::{CurveObservation, MATURITY_COUNT};

/// Maturities (in years) of the ten annual knots on the GSW curve.
pub const CURVE_MATURITIES: [f64; MATURITY_COUNT] =
    [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// 6-quarters-ahead 1-quarter forward rate from two interpolated yields.
pub fn forward_rate(y_1_5: f64, y_1_75: f64) -> f64 {
    7.0 * y_1_75 - 6.0 * y_1_5
}

/// Near-term forward spread: implied forward rate minus the 3-month bill.
pub fn ntfs_from_yields(y_1_5: f64, y_1_75: f64, y_3month: f64) -> f64 {
    forward_rate(y_1_5, y_1_75) - y_3month
}

/// NTFS for one curve observation: spline the ten annual knots, read off
/// the 1.5y and 1.75y yields, apply the forward formula.
pub fn ntfs(curve: &CurveObservation, y_3month: f64) -> Result<f64> {
    let spline = CubicSpline::fit(&CURVE_MATURITIES, &curve.yields)?;
    Ok(ntfs_from_yields(spline.eval(1.5), spline.eval(1.75), y_3month))
}
