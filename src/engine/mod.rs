//! Numeric core: spline interpolation of the zero curve and the
//! forward-spread formulas built on top of it.

pub mod forward;
pub mod spline;
