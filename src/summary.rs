//! Plain-text summary of the most recent indicator values.

use crate::pipeline::SpreadSeries;

const RULE_WIDTH: usize = 60;

/// Render the MOST RECENT VALUES block as a string.
pub fn render(series: &SpreadSeries) -> String {
    let latest = series.latest();
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\nMOST RECENT VALUES\n{rule}\n\
         Date: {date}\n\
         2-10 Spread: {spread:.2}%\n\
         Near-Term Forward Spread: {ntfs:.2}%\n\
         {rule}",
        date = latest.date.format("%B %d, %Y"),
        spread = latest.spread_2_10,
        ntfs = latest.ntfs,
    )
}

/// Print the summary to stdout.
pub fn print(series: &SpreadSeries) {
    println!("{}", render(series));
}
