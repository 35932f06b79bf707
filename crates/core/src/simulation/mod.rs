//! Turn-based fire propagation
//!
//! `FireSimulation` owns the grid for the whole run and advances it one turn at
//! a time:
//! - Cells are scanned in row-major order
//! - Every `Burning` cell ignites its `Flammable` neighbors (up, right, down, left),
//!   then burns out to `Burnt`
//! - Neighbors ignited this turn are held as `PendingIgnite` until the scan
//!   completes, so fire advances exactly one cell-radius per turn
//! - Pending cells are resolved to `Burning` before the frame is rendered
//!
//! The run ends after the first turn in which no cell spread fire.

pub mod renderer;

pub use renderer::{FrameRecorder, FrameRenderer, PacedRenderer};

use crate::core_types::CellState;
use crate::grid::{CellCensus, ForestGrid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// What happened during one turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    /// Flammable cells that caught fire this turn
    pub ignited: usize,
    /// Burning cells that burnt out this turn
    pub burnt_out: usize,
    /// Burning cells that ignited at least one neighbor
    pub spreading_cells: usize,
}

impl TurnReport {
    /// Whether any cell spread fire this turn. A turn without spread ends the run.
    #[inline]
    pub fn spread(&self) -> bool {
        self.spreading_cells > 0
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Turns executed (equals frames rendered)
    pub turns: u32,
    /// Where the fire was started, as `(col, row)`
    pub ignition: Option<(usize, usize)>,
    /// Final state counts
    pub census: CellCensus,
}

impl SimulationSummary {
    /// Fraction of vegetation that burned (0-1). Zero when there was no vegetation.
    pub fn burnt_fraction(&self) -> f64 {
        let vegetation = self.census.burnt + self.census.flammable;
        if vegetation == 0 {
            0.0
        } else {
            self.census.burnt as f64 / vegetation as f64
        }
    }
}

/// Fire propagation engine over a single owned grid
#[derive(Debug, Clone)]
pub struct FireSimulation {
    grid: ForestGrid,
    turn: u32,
    ignition: Option<(usize, usize)>,
    exhausted: bool,
    /// Cells marked `PendingIgnite` during the current scan
    pending: Vec<usize>,
}

impl FireSimulation {
    /// Take ownership of `grid`. Nothing is burning until [`ignite_center`](Self::ignite_center).
    pub fn new(grid: ForestGrid) -> Self {
        FireSimulation {
            grid,
            turn: 0,
            ignition: None,
            exhausted: false,
            pending: Vec::new(),
        }
    }

    /// Set the cell at `(width / 2, height / 2)` to `Burning`, whatever it was before.
    ///
    /// The grid must have a positive area.
    pub fn ignite_center(&mut self) {
        let (col, row) = self.grid.ignition_point();
        let ignited = self.grid.set(col, row, CellState::Burning);
        debug_assert!(ignited, "ignition point ({col}, {row}) is outside the grid");

        self.ignition = Some((col, row));
        self.exhausted = false;
        info!(
            col,
            row,
            width = self.grid.width(),
            height = self.grid.height(),
            "Fire ignited"
        );
    }

    /// Execute a single turn and return what it did.
    ///
    /// A turn with no spread marks the simulation exhausted. Stepping again after
    /// that is harmless because no cell is left `Burning`.
    pub fn step(&mut self) -> TurnReport {
        self.turn += 1;
        let mut report = TurnReport {
            turn: self.turn,
            ..TurnReport::default()
        };

        self.pending.clear();

        for index in 0..self.grid.len() {
            if self.grid.cells[index] != CellState::Burning {
                continue;
            }

            let mut spread = false;
            for neighbor in self.grid.orthogonal_neighbors(index).into_iter().flatten() {
                if self.grid.cells[neighbor] == CellState::Flammable {
                    self.grid.cells[neighbor] = CellState::PendingIgnite;
                    self.pending.push(neighbor);
                    spread = true;
                }
            }

            self.grid.cells[index] = CellState::Burnt;
            report.burnt_out += 1;
            if spread {
                report.spreading_cells += 1;
            }
        }

        // Cells behind the scan cursor are pending too, so resolve after the pass
        for &index in &self.pending {
            self.grid.cells[index] = CellState::Burning;
        }
        report.ignited = self.pending.len();

        if !report.spread() {
            self.exhausted = true;
        }

        trace!(
            turn = report.turn,
            ignited = report.ignited,
            burnt_out = report.burnt_out,
            spreading_cells = report.spreading_cells,
            "Turn complete"
        );
        report
    }

    /// Step until a turn spreads nothing, rendering one frame per turn.
    pub fn run<R: FrameRenderer + ?Sized>(&mut self, renderer: &mut R) -> SimulationSummary {
        loop {
            let report = self.step();
            debug_assert!(
                self.grid.cells.iter().all(|c| c.is_renderable()),
                "PendingIgnite leaked into a rendered frame"
            );
            renderer.render_frame(&self.grid, &report);

            if !report.spread() {
                break;
            }
        }
        debug_assert!(
            !self.grid.cells.iter().any(|c| c.is_on_fire()),
            "fire still burning after a turn without spread"
        );

        let summary = self.summary();
        info!(
            turns = summary.turns,
            burnt = summary.census.burnt,
            unburnt = summary.census.flammable,
            "Fire exhausted"
        );
        summary
    }

    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    pub fn into_grid(self) -> ForestGrid {
        self.grid
    }

    /// Turns executed so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// True once a turn has completed without spreading fire
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            turns: self.turn,
            ignition: self.ignition,
            census: self.grid.census(),
        }
    }
}

/// Ignite the center of `grid`, burn it to exhaustion and return the final grid.
///
/// `on_frame` is called once per turn, including the last one.
pub fn run<F>(grid: ForestGrid, mut on_frame: F) -> ForestGrid
where
    F: FnMut(&ForestGrid),
{
    let mut sim = FireSimulation::new(grid);
    sim.ignite_center();
    let summary = sim.run(&mut on_frame);
    debug!(turns = summary.turns, "Run finished");
    sim.into_grid()
}
