//! Loader for the GSW zero-coupon yield file (feds200628.csv).
//!
//! The published file carries a multi-line preamble before the real CSV
//! header, so the reader skips a configurable number of lines first. Only
//! the `Date` and `SVENY01`..`SVENY10` columns are used.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::{parse_date, parse_yield, CurveObservation, MATURITY_COUNT};

const DATE_COLUMN: &str = "Date";

/// Column names for the ten annual zero-coupon yields, SVENY01..SVENY10.
fn yield_column(maturity_years: usize) -> String {
    format!("SVENY{:02}", maturity_years)
}

/// Load curve observations from a file on disk.
pub fn load(path: &Path, skip_rows: usize) -> Result<Vec<CurveObservation>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open GSW yield file: {}", path.display()))?;
    parse(file, skip_rows).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse curve observations from any reader. Skips `skip_rows` preamble
/// lines, then reads the header row and the data rows after it.
///
/// Rows where the date fails to parse, or where any of the ten maturity
/// yields is missing or non-numeric, are dropped.
pub fn parse(reader: impl Read, skip_rows: usize) -> Result<Vec<CurveObservation>> {
    let mut buf = BufReader::new(reader);
    skip_preamble(&mut buf, skip_rows)?;

    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(buf);

    let headers = csv_reader.headers().context("Missing CSV header row")?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let mut yield_idx = [0usize; MATURITY_COUNT];
    for (i, slot) in yield_idx.iter_mut().enumerate() {
        *slot = column_index(&headers, &yield_column(i + 1))?;
    }

    let mut observations = Vec::new();
    let mut dropped = 0usize;

    for record in csv_reader.records() {
        let record = record.context("Malformed CSV record")?;

        let Some(date) = record.get(date_idx).and_then(parse_date) else {
            dropped += 1;
            continue;
        };

        let mut yields = [0.0; MATURITY_COUNT];
        let mut complete = true;
        for (i, &idx) in yield_idx.iter().enumerate() {
            match record.get(idx).and_then(parse_yield) {
                Some(y) => yields[i] = y,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            dropped += 1;
            continue;
        }

        observations.push(CurveObservation { date, yields });
    }

    tracing::debug!(rows = observations.len(), dropped, "parsed GSW yield curve");
    Ok(observations)
}

pub(super) fn skip_preamble(buf: &mut impl BufRead, skip_rows: usize) -> Result<()> {
    let mut line = String::new();
    for _ in 0..skip_rows {
        line.clear();
        let n = buf.read_line(&mut line).context("Failed reading file preamble")?;
        if n == 0 {
            bail!("File ended inside the {}-line preamble", skip_rows);
        }
    }
    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .with_context(|| format!("Column '{}' not found in header", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
Series notes line 1
Series notes line 2
Date,BETA0,SVENY01,SVENY02,SVENY03,SVENY04,SVENY05,SVENY06,SVENY07,SVENY08,SVENY09,SVENY10
2025-06-02,4.9,4.10,4.20,4.30,4.40,4.50,4.60,4.70,4.80,4.90,5.00
2025-06-03,4.9,4.11,NA,4.31,4.41,4.51,4.61,4.71,4.81,4.91,5.01
2025-06-04,4.9,4.12,4.22,4.32,4.42,4.52,4.62,4.72,4.82,4.92,5.02
";

    #[test]
    fn test_parses_complete_rows() {
        let obs = parse(SAMPLE.as_bytes(), 2).unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(obs[0].yields[0], 4.10);
        assert_eq!(obs[0].ten_year(), 5.00);
        assert_eq!(obs[0].two_year(), 4.20);
    }

    #[test]
    fn test_row_with_missing_maturity_is_excluded() {
        // 2025-06-03 has NA in SVENY02 and must not survive parsing.
        let obs = parse(SAMPLE.as_bytes(), 2).unwrap();
        assert!(obs.iter().all(|o| o.date != NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()));
    }

    #[test]
    fn test_unparseable_date_is_excluded() {
        let sample = "\
Date,SVENY01,SVENY02,SVENY03,SVENY04,SVENY05,SVENY06,SVENY07,SVENY08,SVENY09,SVENY10
bogus,1,2,3,4,5,6,7,8,9,10
2025-06-02,1,2,3,4,5,6,7,8,9,10
";
        let obs = parse(sample.as_bytes(), 0).unwrap();
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let sample = "Date,SVENY01\n2025-06-02,4.1\n";
        let err = parse(sample.as_bytes(), 0).unwrap_err();
        assert!(err.to_string().contains("SVENY02"));
    }

    #[test]
    fn test_preamble_longer_than_file_is_an_error() {
        assert!(parse("one line\n".as_bytes(), 9).is_err());
    }
}
