mod config;
mod data;
mod engine;
mod pipeline;
mod summary;
mod tui;

use anyhow::Result;
use config::Config;
use std::path::Path;

fn main() -> Result<()> {
    // Log to a file: the TUI owns the terminal while the chart is up.
    let log_file = std::fs::File::create("curve-watch.log")?;
    tracing_subscriber::fmt()
        .with_env_filter("curve_watch=info")
        .with_writer(log_file)
        .init();

    let no_chart = std::env::args().any(|arg| arg == "--no-chart");

    let config = Config::load(Path::new("config.toml"))?;

    let today = chrono::Local::now().date_naive();
    let series = pipeline::run(&config, today)?;

    if !no_chart {
        tui::run_chart(&series)?;
    }

    summary::print(&series);
    Ok(())
}
