//! Not-a-knot cubic spline interpolation.
//!
//! Matches the default boundary conditions of the reference interpolators
//! used for yield-curve work: the third derivative is continuous across the
//! second and second-to-last knots, so the first two (and last two) intervals
//! share a single cubic. With those conditions the spline reproduces any
//! global cubic exactly, and always passes exactly through the knots.

use anyhow::{bail, Result};

/// A cubic interpolant through a set of strictly increasing knots.
///
/// Stored as the knot positions, knot values, and the second derivative of
/// the spline at each knot (the "moments"). Evaluation reconstructs the
/// piecewise cubic from those.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    moments: Vec<f64>,
}

impl CubicSpline {
    /// Fit a not-a-knot cubic spline through `(xs[i], ys[i])`.
    ///
    /// Requires at least 4 knots with strictly increasing `xs`.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let n = xs.len();
        if n != ys.len() {
            bail!("knot count mismatch: {} x values, {} y values", n, ys.len());
        }
        if n < 4 {
            bail!("cubic spline needs at least 4 knots, got {}", n);
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            bail!("spline knots must be strictly increasing");
        }
        if ys.iter().any(|y| !y.is_finite()) {
            bail!("spline knot values must be finite");
        }

        let moments = solve_moments(xs, ys);
        Ok(Self { xs: xs.to_vec(), ys: ys.to_vec(), moments })
    }

    /// Evaluate the spline at `x`. Outside the knot range the cubic of the
    /// nearest end interval is extrapolated.
    pub fn eval(&self, x: f64) -> f64 {
        let i = self.interval(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);
        let h = x1 - x0;

        let a = (x1 - x) / h;
        let b = (x - x0) / h;

        // Hermite form in terms of the end moments of the interval.
        a * y0
            + b * y1
            + ((a * a * a - a) * m0 + (b * b * b - b) * m1) * (h * h) / 6.0
    }

    /// Index of the interval whose cubic covers `x`, clamped to the ends.
    fn interval(&self, x: f64) -> usize {
        let n = self.xs.len();
        match self.xs.partition_point(|&knot| knot <= x) {
            0 => 0,
            p => (p - 1).min(n - 2),
        }
    }
}

/// Solve the tridiagonal moment system for not-a-knot boundary conditions.
///
/// Interior continuity gives n-2 equations in the moments M_0..M_{n-1}; the
/// not-a-knot conditions express M_0 and M_{n-1} in terms of their
/// neighbors, which folds into modified first and last rows of an
/// (n-2)-sized tridiagonal system solved with the Thomas algorithm.
fn solve_moments(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, &hi)| (w[1] - w[0]) / hi)
        .collect();

    // Unknowns are M_1..M_{n-2}.
    let m = n - 2;
    let mut sub = vec![0.0; m];
    let mut diag = vec![0.0; m];
    let mut sup = vec![0.0; m];
    let mut rhs = vec![0.0; m];

    for k in 0..m {
        let i = k + 1; // knot index
        sub[k] = h[i - 1];
        diag[k] = 2.0 * (h[i - 1] + h[i]);
        sup[k] = h[i];
        rhs[k] = 6.0 * (slope[i] - slope[i - 1]);
    }

    // Not-a-knot at the left end: h1*M0 = (h0+h1)*M1 - h0*M2, folded into
    // the first row.
    diag[0] += h[0] * (h[0] + h[1]) / h[1];
    sup[0] -= h[0] * h[0] / h[1];

    // Mirror condition at the right end.
    let (ha, hb) = (h[n - 3], h[n - 2]); // last two interval widths
    diag[m - 1] += hb * (ha + hb) / ha;
    sub[m - 1] -= hb * hb / ha;

    // Thomas algorithm (forward elimination, back substitution).
    for k in 1..m {
        let w = sub[k] / diag[k - 1];
        diag[k] -= w * sup[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }
    let mut inner = vec![0.0; m];
    inner[m - 1] = rhs[m - 1] / diag[m - 1];
    for k in (0..m - 1).rev() {
        inner[k] = (rhs[k] - sup[k] * inner[k + 1]) / diag[k];
    }

    let mut moments = vec![0.0; n];
    moments[1..n - 1].copy_from_slice(&inner);
    // Recover the end moments from the not-a-knot conditions.
    moments[0] = ((h[0] + h[1]) * moments[1] - h[0] * moments[2]) / h[1];
    moments[n - 1] = ((ha + hb) * moments[n - 2] - hb * moments[n - 3]) / ha;
    moments
}
