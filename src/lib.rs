//! curve-watch: Treasury yield-spread recession indicators from published
//! zero-coupon curve and bill-rate data.

pub mod config;
pub mod data;
pub mod engine;
pub mod pipeline;
pub mod summary;
pub mod tui;
