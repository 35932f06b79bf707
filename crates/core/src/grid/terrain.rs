//! Random terrain generation under a density constraint
//!
//! Vegetation is scattered by repeated row-major passes over the grid. Every
//! `Empty` cell visited draws a uniform value in `[0, 1)` and becomes `Flammable`
//! when the draw is `<= density`. Generation stops the moment the target count
//! `floor(width * height * density)` is reached, even in the middle of a pass.

use crate::config::SimulationConfig;
use crate::core_types::CellState;
use crate::grid::ForestGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Number of flammable cells a `width x height` grid must hold at `density`
pub fn target_flammable_count(width: usize, height: usize, density: f64) -> usize {
    let area = width * height;
    // Clamped so rounding can never ask for more cells than exist
    ((area as f64 * density).floor() as usize).min(area)
}

/// Generate a grid using the thread-local RNG.
///
/// Preconditions: `width > 0`, `height > 0`, `0.0 <= density <= 1.0`.
/// Validate user input with [`SimulationConfig::validate`] first.
pub fn generate(width: usize, height: usize, density: f64) -> ForestGrid {
    generate_with_rng(width, height, density, &mut rand::rng())
}

/// Generate a grid drawing from `rng`. Same preconditions as [`generate`].
pub fn generate_with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> ForestGrid {
    debug_assert!(
        (0.0..=1.0).contains(&density),
        "density must be within [0, 1], got {density}"
    );

    let mut grid = ForestGrid::new(width, height);
    let target = target_flammable_count(width, height, density);
    let passes = scatter_vegetation(&mut grid, target, density, rng);

    debug!(width, height, density, target, passes, "Generated terrain");
    grid
}

/// Convert `Empty` cells to `Flammable` until `target` cells have been planted.
/// Returns the number of passes started.
fn scatter_vegetation<R: Rng + ?Sized>(
    grid: &mut ForestGrid,
    target: usize,
    density: f64,
    rng: &mut R,
) -> usize {
    let mut planted = 0;
    let mut passes = 0;

    'passes: while planted < target {
        passes += 1;
        for cell in &mut grid.cells {
            if *cell != CellState::Empty {
                continue;
            }
            if rng.random::<f64>() <= density {
                *cell = CellState::Flammable;
                planted += 1;
                if planted >= target {
                    break 'passes;
                }
            }
        }
    }

    passes
}

/// Terrain generator configured from a [`SimulationConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainGenerator {
    width: usize,
    height: usize,
    density: f64,
    seed: Option<u64>,
}

impl TerrainGenerator {
    pub fn new(width: usize, height: usize, density: f64) -> Self {
        TerrainGenerator {
            width,
            height,
            density,
            seed: None,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        TerrainGenerator {
            width: config.width,
            height: config.height,
            density: config.density,
            seed: config.seed,
        }
    }

    /// Fix the RNG seed so the same terrain is produced every time
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Flammable cells the generated grid will contain
    pub fn target_count(&self) -> usize {
        target_flammable_count(self.width, self.height, self.density)
    }

    pub fn generate(&self) -> ForestGrid {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generate_with_rng(self.width, self.height, self.density, &mut rng)
            }
            None => generate(self.width, self.height, self.density),
        }
    }
}
