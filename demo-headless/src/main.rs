use clap::Parser;
use forest_fire_core::{
    FireSimulation, ForestGrid, FrameRenderer, PacedRenderer, SimulationConfig,
    SimulationSummary, TerrainGenerator, TurnReport,
};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Forest fire simulation with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Forest fire cellular automaton, rendered as text", long_about = None)]
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

    /// Print every frame as text
    #[arg(short, long)]
    frames: bool,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 0)]
    frame_delay_ms: u64,

    /// How long to keep the final frame on screen, in milliseconds
    #[arg(long, default_value_t = 0)]
    hold_ms: u64,
}

impl Args {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width,
            height: self.height,
            density: self.density,
            seed: self.seed,
            frame_delay: self.frame_delay(),
            final_hold: Duration::from_millis(self.hold_ms),
        }
    }

    /// Pacing only applies when frames are printed
    fn frame_delay(&self) -> Duration {
        if self.frames {
            Duration::from_millis(self.frame_delay_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Prints frames as glyph rows: `~` water, `T` tree, `*` fire, `.` ash
struct TextRenderer {
    print_frames: bool,
}

impl FrameRenderer for TextRenderer {
    fn render_frame(&mut self, grid: &ForestGrid, report: &TurnReport) {
        if !self.print_frames {
            return;
        }
        println!(
            "--- Turn {} (ignited {}, burnt out {}) ---",
            report.turn, report.ignited, report.burnt_out
        );
        println!("{grid}");
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.to_config();

    if let Err(e) = config.validate() {
        error!("Invalid parameters: {e}");
        return ExitCode::FAILURE;
    }

    println!("=== Forest Fire Simulation ===\n");

    let generator = TerrainGenerator::from_config(&config);
    let grid = generator.generate();
    println!(
        "Generated {}x{} forest with {} trees ({:.0}% density)",
        grid.width(),
        grid.height(),
        grid.census().flammable,
        config.density * 100.0
    );
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }

    let mut sim = FireSimulation::new(grid);
    sim.ignite_center();

    let mut renderer = PacedRenderer::new(
        TextRenderer {
            print_frames: args.frames,
        },
        config.frame_delay,
    );
    let summary = sim.run(&mut renderer);

    if !args.frames {
        println!("\nFinal state:");
        println!("{}", sim.grid());
    }
    if !config.final_hold.is_zero() {
        info!("Holding final frame for {:?}", config.final_hold);
        thread::sleep(config.final_hold);
    }

    print_summary(&summary);
    ExitCode::SUCCESS
}

fn print_summary(summary: &SimulationSummary) {
    let census = &summary.census;
    println!("\n=== Summary ===");
    if let Some((col, row)) = summary.ignition {
        println!("Ignition point: ({col}, {row})");
    }
    println!("Turns: {}", summary.turns);
    println!("Burnt: {}", census.burnt);
    println!("Unburnt trees: {}", census.flammable);
    println!("Empty ground: {}", census.empty);
    println!("Burnt fraction: {:.1}%", summary.burnt_fraction() * 100.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pacing_without_frames() {
        let args = Args::parse_from(["demo-headless", "--frame-delay-ms", "200"]);
        assert!(args.to_config().frame_delay.is_zero());
    }

    #[test]
    fn test_pacing_with_frames() {
        let args = Args::parse_from(["demo-headless", "--frames", "--frame-delay-ms", "200"]);
        assert_eq!(args.to_config().frame_delay, Duration::from_millis(200));
    }
}
