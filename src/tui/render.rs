use super::state::ChartState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

const SPREAD_COLOR: Color = Color::Blue;
const NTFS_COLOR: Color = Color::LightRed;

pub fn draw(f: &mut Frame, state: &ChartState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_chart(f, state, chunks[0]);
    draw_annotations(f, state, chunks[1]);
    draw_footer(f, chunks[2]);
}

fn draw_chart(f: &mut Frame, state: &ChartState, area: Rect) {
    // Zero baseline spanning the full x range.
    let baseline = [(state.x_bounds[0], 0.0), (state.x_bounds[1], 0.0)];

    let datasets = vec![
        Dataset::default()
            .name("2-10 Spread (10Y - 2Y)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SPREAD_COLOR))
            .data(&state.spread_2_10),
        Dataset::default()
            .name("Near-Term Forward Spread")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(NTFS_COLOR))
            .data(&state.ntfs),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&baseline),
    ];

    let x_labels: Vec<Span> = state
        .x_labels
        .iter()
        .map(|l| Span::styled(l.clone(), Style::default().fg(Color::Gray)))
        .collect();

    let [y_lo, y_hi] = state.y_bounds;
    let y_labels = vec![
        Span::raw(format!("{:.2}", y_lo)),
        Span::raw(format!("{:.2}", (y_lo + y_hi) / 2.0)),
        Span::raw(format!("{:.2}", y_hi)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Yield Spreads: Last 12 Months ",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(state.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Percentage Points")
                .style(Style::default().fg(Color::Gray))
                .bounds(state.y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Most-recent-value callouts, mirroring the annotated chart the tool
/// replaces: one line per series in the series color, plus the as-of date.
fn draw_annotations(f: &mut Frame, state: &ChartState, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::raw("  2-10 Spread: "),
            Span::styled(
                format!("{:.2}%", state.latest_spread_2_10),
                Style::default().fg(SPREAD_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Near-Term Forward Spread: "),
            Span::styled(
                format!("{:.2}%", state.latest_ntfs),
                Style::default().fg(NTFS_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  As of: {}", state.latest_date.format("%b %d, %Y")),
            Style::default().fg(Color::Gray),
        )),
    ];

    let para = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Most Recent "));
    f.render_widget(para, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Span::styled(
        "q: quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
