//! Interactive Forest Fire Viewer
//!
//! Terminal viewer that draws every turn of the simulation in color:
//! royal blue ground, green trees, red fire, black ash.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive -- --width 120 --height 80 --density 0.65
//! ```
//!
//! Press `q` or `Esc` to quit. Quitting stops the viewer from requesting further
//! turns; the simulation itself is never interrupted mid-turn.

use clap::Parser;
use forest_fire_core::{
    CellState, FireSimulation, ForestGrid, SimulationConfig, TerrainGenerator, TurnReport,
};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Cells are drawn two rows per terminal line with an upper half block
const HALF_BLOCK: &str = "\u{2580}";

#[derive(Parser, Debug)]
#[command(name = "forest-fire-viewer")]
#[command(about = "Watch a forest fire spread in the terminal", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 95)]
    height: usize,

    /// Target fraction of flammable cells (0-1)
    #[arg(short, long, default_value_t = 0.7)]
    density: f64,

    /// RNG seed for reproducible terrain
    #[arg(short, long)]
    seed: Option<u64>,
}

/// How the viewer ended
enum Outcome {
    Finished,
    Quit { turn: u32 },
}

fn main() -> ExitCode {
    // Logs go to stderr so they don't tear the alternate screen; redirect to keep them
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = SimulationConfig {
        seed: args.seed,
        ..SimulationConfig::new(args.width, args.height, args.density)
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid parameters: {e}");
        return ExitCode::FAILURE;
    }

    let grid = TerrainGenerator::from_config(&config).generate();
    let mut sim = FireSimulation::new(grid);
    sim.ignite_center();

    let mut terminal = ratatui::init();
    let result = run_viewer(&mut terminal, &mut sim, &config);
    ratatui::restore();

    match result {
        Ok(outcome) => {
            let summary = sim.summary();
            match outcome {
                Outcome::Finished => println!("Fire burnt out after {} turns", summary.turns),
                Outcome::Quit { turn } => println!("Stopped after turn {turn}"),
            }
            println!(
                "Burnt {} of {} trees ({:.1}%)",
                summary.census.burnt,
                summary.census.burnt + summary.census.flammable,
                summary.burnt_fraction() * 100.0
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Step the simulation, drawing each turn, then hold the last frame
fn run_viewer(
    terminal: &mut DefaultTerminal,
    sim: &mut FireSimulation,
    config: &SimulationConfig,
) -> io::Result<Outcome> {
    loop {
        let report = sim.step();
        terminal.draw(|frame| draw(frame, sim.grid(), &report))?;

        if !report.spread() {
            break;
        }
        if quit_requested(config.frame_delay)? {
            info!(turn = report.turn, "Viewer quit before the fire burnt out");
            return Ok(Outcome::Quit { turn: report.turn });
        }
    }

    let deadline = Instant::now() + config.final_hold;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || quit_requested(remaining)? {
            break;
        }
    }
    Ok(Outcome::Finished)
}

/// Wait up to `timeout` for `q` or `Esc`
fn quit_requested(timeout: Duration) -> io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc));
        }
    }
    Ok(false)
}

fn draw(frame: &mut Frame, grid: &ForestGrid, report: &TurnReport) {
    let [header, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    let census = grid.census();
    let status = format!(
        " Turn {} | fire {} | trees {} | ash {} | q to quit",
        report.turn, census.burning, census.flammable, census.burnt
    );
    frame.render_widget(Line::from(status), header);

    let forest = Paragraph::new(grid_lines(grid)).block(Block::bordered().title(" Forest Fire "));
    frame.render_widget(forest, body);
}

/// Upper half of each glyph is one row, lower half the next
fn grid_lines(grid: &ForestGrid) -> Vec<Line<'static>> {
    (0..grid.height())
        .step_by(2)
        .map(|top| {
            let spans: Vec<Span<'static>> = (0..grid.width())
                .map(|col| {
                    let upper = grid.get(col, top).unwrap_or_default();
                    let style = match grid.get(col, top + 1) {
                        Some(lower) => Style::default().fg(cell_color(upper)).bg(cell_color(lower)),
                        None => Style::default().fg(cell_color(upper)),
                    };
                    Span::styled(HALF_BLOCK, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_color(state: CellState) -> Color {
    let [r, g, b] = state.color();
    Color::Rgb(r, g, b)
}
