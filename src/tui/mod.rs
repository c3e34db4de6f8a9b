pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use state::ChartState;
use std::io::stdout;
use std::time::Duration;

use crate::pipeline::SpreadSeries;

/// Show the chart until the user quits with `q` or Esc.
pub fn run_chart(series: &SpreadSeries) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = chart_loop(&mut terminal, &ChartState::new(series));

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn chart_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &ChartState,
) -> Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, state))?;

        // The data is static; poll only so resizes trigger a redraw.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}
