//! Integration tests for turn-based fire propagation
//!
//! Covers the ordering rules (one cell-radius per turn, no same-turn chaining),
//! termination, frame rendering and unreachable fuel.

use approx::assert_relative_eq;
use ctor::ctor;
use forest_fire_core::{
    run, CellState, FireSimulation, ForestGrid, FrameRecorder, TerrainGenerator,
};
use tracing_subscriber::EnvFilter;

use CellState::{Burning, Burnt, Empty, Flammable};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Ignite the center and run to exhaustion, keeping every frame
fn burn(grid: ForestGrid) -> (FireSimulation, FrameRecorder) {
    let mut sim = FireSimulation::new(grid);
    sim.ignite_center();
    let mut recorder = FrameRecorder::new();
    sim.run(&mut recorder);
    (sim, recorder)
}

#[test]
fn test_row_of_three_burns_in_two_turns() {
    let grid = ForestGrid::from_rows(&[[Flammable, Flammable, Flammable]]).unwrap();
    let (sim, recorder) = burn(grid);

    assert_eq!(recorder.frame_count(), 2);
    assert_eq!(recorder.frames()[0].cells(), &[Burning, Burnt, Burning]);
    assert_eq!(recorder.frames()[1].cells(), &[Burnt, Burnt, Burnt]);
    assert_eq!(sim.grid().count(Flammable), 0);
}

#[test]
fn test_empty_grid_renders_single_turn() {
    let (sim, recorder) = burn(ForestGrid::new(9, 7));

    assert_eq!(recorder.frame_count(), 1);
    assert!(!recorder.reports()[0].spread());

    let census = sim.grid().census();
    assert_eq!(census.burnt, 1);
    assert_eq!(census.empty, 62);
    assert_eq!(sim.grid().get(4, 3), Some(Burnt));
}

#[test]
fn test_fire_advances_one_cell_per_turn() {
    let grid = ForestGrid::filled(9, 1, Flammable);
    let (sim, recorder) = burn(grid);

    // Four turns to reach both ends, one more for the ends to burn out
    assert_eq!(sim.turn(), 5);

    for (i, frame) in recorder.frames().iter().take(4).enumerate() {
        let distance = i + 1;
        assert_eq!(frame.get(4 - distance, 0), Some(Burning));
        assert_eq!(frame.get(4 + distance, 0), Some(Burning));
        assert_eq!(frame.count(Burning), 2, "turn {} has a wider front", i + 1);
    }
}

#[test]
fn test_flammable_count_strictly_decreases_while_spreading() {
    let mut grid = TerrainGenerator::new(60, 40, 0.7).with_seed(2024).generate();
    let (col, row) = grid.ignition_point();
    grid.set(col + 1, row, Flammable);

    let initial = grid.count(Flammable);
    let (sim, recorder) = burn(grid);

    let mut previous = initial;
    for (frame, report) in recorder.frames().iter().zip(recorder.reports()) {
        let current = frame.count(Flammable);
        if report.spread() {
            assert!(current < previous, "turn {} did not consume fuel", report.turn);
        } else {
            assert_eq!(current, previous);
        }
        previous = current;
    }

    let census = sim.grid().census();
    assert!(census.flammable < initial);
    assert_eq!(census.burning, 0);
    assert_eq!(census.pending, 0);
}

#[test]
fn test_rendered_frames_never_show_pending_cells() {
    let grid = TerrainGenerator::new(30, 30, 0.8).with_seed(9).generate();
    let (_, recorder) = burn(grid);

    for frame in recorder.frames() {
        assert_eq!(frame.count(CellState::PendingIgnite), 0);
    }

    // Ash is terminal: once burnt, a cell stays burnt in every later frame
    for (turn, pair) in recorder.frames().windows(2).enumerate() {
        for (before, after) in pair[0].cells().iter().zip(pair[1].cells()) {
            if *before == Burnt {
                assert_eq!(*after, Burnt, "burnt cell changed after turn {}", turn + 1);
            }
        }
    }
    assert!(recorder.frame_count() > 2);
}

#[test]
fn test_firebreak_protects_unreachable_pocket() {
    // Column 5 is cleared ground; the fire starts at (3, 3)
    let mut grid = ForestGrid::filled(7, 7, Flammable);
    for row in 0..7 {
        grid.set(5, row, Empty);
    }

    let (sim, _) = burn(grid);
    let summary = sim.summary();

    assert_eq!(summary.census.flammable, 7);
    assert_eq!(summary.census.burnt, 35);
    assert_eq!(summary.census.burning, 0);
    for row in 0..7 {
        assert_eq!(sim.grid().get(6, row), Some(Flammable));
    }
    assert_relative_eq!(summary.burnt_fraction(), 35.0 / 42.0);
}

#[test]
fn test_fully_vegetated_grid_burns_completely() {
    let grid = ForestGrid::filled(11, 11, Flammable);
    let (sim, recorder) = burn(grid);
    let summary = sim.summary();

    // Manhattan distance from (5, 5) to a corner is 10
    assert_eq!(summary.turns, 11);
    assert_eq!(recorder.frame_count(), 11);
    assert_eq!(summary.census.burnt, 121);
    assert_relative_eq!(summary.burnt_fraction(), 1.0);
}

#[test]
fn test_rendering_does_not_change_the_grid() {
    let grid = TerrainGenerator::new(25, 15, 0.65).with_seed(77).generate();

    let mut last_seen = None;
    let result = run(grid.clone(), |frame| last_seen = Some(frame.clone()));

    assert_eq!(last_seen.as_ref(), Some(&result));

    // Same input without a renderer doing anything gives the same result
    let silent = run(grid, |_| {});
    assert_eq!(silent, result);
}

#[test]
fn test_ignition_on_empty_cell_still_burns() {
    let mut grid = ForestGrid::filled(5, 5, Flammable);
    grid.set(2, 2, Empty);

    let result = run(grid, |_| {});

    assert_eq!(result.count(Burnt), 25);
}
