//! Terminal rendering of comparison output.
//!
//! This layer owns everything visual: colors, bar scaling, legends, and the
//! closing of radar shapes is its concern alone. It consumes the
//! orchestrator's vectors and labels and never reaches back into records.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::compare::{Comparison, DistanceBucket, DistanceSide, PartitionSide, PlayerCard, RadarSide};
use crate::record::StatFamily;

const P1_COLOR: Color = Color::Red;
const P2_COLOR: Color = Color::Blue;

/// Show one comparison full-screen until the user dismisses it.
pub fn show(comparison: &Comparison) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run(&mut terminal, comparison);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, comparison: &Comparison) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, comparison))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
            {
                return Ok(());
            }
        }
    }
}

fn ui(frame: &mut Frame, comparison: &Comparison) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let title = Paragraph::new(title_text(comparison))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    match comparison {
        Comparison::Radar {
            labels, p1, p2, ..
        } => render_radar(frame, chunks[1], labels, p1, p2),
        Comparison::Partitions { family, p1, p2 } => {
            render_partitions(frame, chunks[1], *family, p1, p2)
        }
        Comparison::Distance {
            labels, p1, p2, ..
        } => render_distance(frame, chunks[1], labels, p1, p2),
    }

    let footer =
        Paragraph::new("q / Esc / Enter: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

fn title_text(comparison: &Comparison) -> String {
    match comparison {
        Comparison::Radar { family, p1, p2, .. } => versus_title(*family, &p1.card, &p2.card),
        Comparison::Partitions { family, p1, p2 } => versus_title(*family, &p1.card, &p2.card),
        Comparison::Distance { family, p1, p2, .. } => versus_title(*family, &p1.card, &p2.card),
    }
}

fn versus_title(family: StatFamily, c1: &PlayerCard, c2: &PlayerCard) -> String {
    format!(
        "{} ({}) vs {} ({}): {}",
        c1.name,
        c1.season.display(),
        c2.name,
        c2.season.display(),
        family.title()
    )
}

fn render_radar(frame: &mut Frame, area: Rect, labels: &[&str], p1: &RadarSide, p2: &RadarSide) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    const ROW_HEIGHT: u16 = 3;
    let chart = columns[0];
    let visible = (chart.height / ROW_HEIGHT) as usize;
    for (i, label) in labels.iter().take(visible).enumerate() {
        let row_area = Rect {
            x: chart.x,
            y: chart.y + (i as u16) * ROW_HEIGHT,
            width: chart.width,
            height: ROW_HEIGHT,
        };
        let lines = vec![
            Line::from(Span::styled(
                (*label).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            scaled_bar_line(p1.raw[i], p1.scaled[i], row_area.width, P1_COLOR),
            scaled_bar_line(p2.raw[i], p2.scaled[i], row_area.width, P2_COLOR),
        ];
        frame.render_widget(Paragraph::new(lines), row_area);
    }

    render_legend(frame, columns[1], &p1.card, &p2.card);
}

// A bar scaled so that 1.0 would touch the right edge; normalized values
// top out at 1/1.1, which keeps the annotation clear of the border.
fn scaled_bar_line(raw: f64, scaled: f64, width: u16, color: Color) -> Line<'static> {
    let bar_width = width.saturating_sub(10);
    let cells = (scaled.clamp(0.0, 1.0) * bar_width as f64).round() as usize;
    Line::from(vec![
        Span::styled(
            format!("{raw:>7.2} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(cells), Style::default().fg(color)),
    ])
}

fn render_legend(frame: &mut Frame, area: Rect, c1: &PlayerCard, c2: &PlayerCard) {
    let block = Block::default().title("Legend").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = legend_lines(c1, P1_COLOR);
    lines.push(Line::from(""));
    lines.extend(legend_lines(c2, P2_COLOR));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_lines(card: &PlayerCard, color: Color) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(format!("{} ({})", card.name, card.season.display())),
    ])];
    lines.push(Line::from(format!("  {}", card.team)));
    if let Some(nineties) = card.nineties {
        lines.push(Line::from(format!("  Full 90s: {nineties}")));
    }
    lines
}

fn render_partitions(
    frame: &mut Frame,
    area: Rect,
    family: StatFamily,
    p1: &PartitionSide,
    p2: &PartitionSide,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_partition_panel(frame, columns[0], family, p1, P1_COLOR);
    render_partition_panel(frame, columns[1], family, p2, P2_COLOR);
}

fn render_partition_panel(
    frame: &mut Frame,
    area: Rect,
    family: StatFamily,
    side: &PartitionSide,
    color: Color,
) {
    let title = format!(
        "{} ({}): {}",
        side.card.name,
        side.card.season.display(),
        family.title()
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = side.partition.total();
    let mut lines = vec![
        Line::from(format!("{} | total: {}", side.card.team, total)),
        Line::from(""),
    ];
    let bar_width = inner.width.saturating_sub(2) as f64;
    for entry in &side.partition.entries {
        let share = if total > 0 {
            entry.count as f64 / total as f64
        } else {
            0.0
        };
        lines.push(Line::from(format!(
            "{:<14} {} ({:.0}%)",
            entry.label,
            entry.count,
            share * 100.0
        )));
        let cells = (share * bar_width).round() as usize;
        lines.push(Line::from(Span::styled(
            "█".repeat(cells),
            Style::default().fg(color),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_distance(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    p1: &DistanceSide,
    p2: &DistanceSide,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    let max_attempted = p1
        .buckets
        .iter()
        .chain(&p2.buckets)
        .map(|b| b.attempted)
        .fold(1.0_f64, f64::max);

    const ROW_HEIGHT: u16 = 3;
    let chart = columns[0];
    let visible = (chart.height / ROW_HEIGHT) as usize;
    for (i, label) in labels.iter().take(visible).enumerate() {
        let row_area = Rect {
            x: chart.x,
            y: chart.y + (i as u16) * ROW_HEIGHT,
            width: chart.width,
            height: ROW_HEIGHT,
        };
        let lines = vec![
            Line::from(Span::styled(
                (*label).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            distance_bar_line(&p1.buckets[i], max_attempted, row_area.width, P1_COLOR),
            distance_bar_line(&p2.buckets[i], max_attempted, row_area.width, P2_COLOR),
        ];
        frame.render_widget(Paragraph::new(lines), row_area);
    }

    render_legend(frame, columns[1], &p1.card, &p2.card);
}

// Full bar length tracks attempts relative to the biggest bucket on screen;
// the solid portion is the completed share of those attempts.
fn distance_bar_line(
    bucket: &DistanceBucket,
    max_attempted: f64,
    width: u16,
    color: Color,
) -> Line<'static> {
    let bar_width = width.saturating_sub(24) as f64;
    let total_cells = ((bucket.attempted / max_attempted) * bar_width).round() as usize;
    let filled = if bucket.attempted > 0.0 {
        (((bucket.completed / bucket.attempted) * total_cells as f64).round() as usize)
            .min(total_cells)
    } else {
        0
    };
    Line::from(vec![
        Span::styled(
            format!(
                "{:>7.2}/{:<7.2} ({:>3.0}%) ",
                bucket.completed, bucket.attempted, bucket.pct
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(total_cells - filled),
            Style::default().fg(color).add_modifier(Modifier::DIM),
        ),
    ])
}
