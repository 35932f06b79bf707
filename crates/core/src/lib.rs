//! Forest Fire Simulation Core Library
//!
//! A cellular-automaton wildfire model on a randomly generated terrain grid.
//!
//! ## Pipeline
//!
//! - [`grid::terrain`] scatters vegetation until a target density is reached
//! - [`simulation::FireSimulation`] ignites the center cell and spreads fire turn by
//!   turn to orthogonal neighbors until a turn spreads nothing
//! - A [`FrameRenderer`] is handed the grid after every turn
//!
//! ```
//! use forest_fire_core::{run, CellState, TerrainGenerator};
//!
//! let grid = TerrainGenerator::new(20, 10, 0.6).with_seed(1).generate();
//! let mut frames = 0;
//! let burnt = run(grid, |_| frames += 1);
//!
//! assert!(frames >= 1);
//! assert_eq!(burnt.count(CellState::Burning), 0);
//! ```

// Core types and utilities
pub mod core_types;

pub mod config;
pub mod error;
pub mod grid;
pub mod simulation;

// Re-export core types
pub use core_types::CellState;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use grid::{generate, generate_with_rng, CellCensus, ForestGrid, TerrainGenerator};
pub use simulation::{
    run, FireSimulation, FrameRecorder, FrameRenderer, PacedRenderer, SimulationSummary,
    TurnReport,
};
