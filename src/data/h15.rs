//! Loader for the FRB H.15 selected-interest-rates file (FRB_H15.csv).
//!
//! Same shape as the GSW loader: skip the descriptive preamble, then read
//! the real header. The date lives in the first column ("Time Period" in
//! the published download) and the 3-month constant-maturity bill yield in
//! the `RIFLGFCM03_N.B` series column. Holiday rows carry "ND" and drop out.

use anyhow::{Context, Result};
use std::io::{BufReader, Read};
use std::path::Path;

use super::{parse_date, parse_yield, BillObservation};

const DEFAULT_SERIES_COLUMN: &str = "RIFLGFCM03_N.B";

pub fn load(path: &Path, skip_rows: usize, series_column: Option<&str>) -> Result<Vec<BillObservation>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open H.15 file: {}", path.display()))?;
    parse(file, skip_rows, series_column)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse(
    reader: impl Read,
    skip_rows: usize,
    series_column: Option<&str>,
) -> Result<Vec<BillObservation>> {
    let series_column = series_column.unwrap_or(DEFAULT_SERIES_COLUMN);

    let mut buf = BufReader::new(reader);
    super::gsw::skip_preamble(&mut buf, skip_rows)?;

    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(buf);

    let headers = csv_reader.headers().context("Missing CSV header row")?.clone();
    let series_idx = headers
        .iter()
        .position(|h| h.trim() == series_column)
        .with_context(|| format!("Column '{}' not found in header", series_column))?;

    let mut observations = Vec::new();
    let mut dropped = 0usize;

    for record in csv_reader.records() {
        let record = record.context("Malformed CSV record")?;

        // Date is positionally the first column, whatever its header says.
        let date = record.get(0).and_then(parse_date);
        let y_3month = record.get(series_idx).and_then(parse_yield);

        match (date, y_3month) {
            (Some(date), Some(y_3month)) => observations.push(BillObservation { date, y_3month }),
            _ => dropped += 1,
        }
    }

    tracing::debug!(rows = observations.len(), dropped, "parsed H.15 bill yields");
    Ok(observations)
}
