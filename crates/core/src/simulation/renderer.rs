//! Frame renderer interface
//!
//! The propagation engine hands every completed turn to a [`FrameRenderer`].
//! Renderers only ever receive a shared borrow of the grid, so drawing a frame
//! cannot change the simulation.

use crate::grid::ForestGrid;
use crate::simulation::TurnReport;
use std::thread;
use std::time::Duration;

/// Receives one frame per completed turn
pub trait FrameRenderer {
    /// Draw the grid as it stands at the end of a turn.
    ///
    /// Called synchronously; the next turn starts only after this returns.
    fn render_frame(&mut self, grid: &ForestGrid, report: &TurnReport);
}

impl<F> FrameRenderer for F
where
    F: FnMut(&ForestGrid),
{
    fn render_frame(&mut self, grid: &ForestGrid, _report: &TurnReport) {
        self(grid);
    }
}

/// Keeps a copy of every frame it is shown
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<ForestGrid>,
    reports: Vec<TurnReport>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots in render order
    pub fn frames(&self) -> &[ForestGrid] {
        &self.frames
    }

    /// Turn reports in render order
    pub fn reports(&self) -> &[TurnReport] {
        &self.reports
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&ForestGrid> {
        self.frames.last()
    }
}

impl FrameRenderer for FrameRecorder {
    fn render_frame(&mut self, grid: &ForestGrid, report: &TurnReport) {
        self.frames.push(grid.clone());
        self.reports.push(*report);
    }
}

/// Wraps a renderer and sleeps after each frame so a human can follow along
#[derive(Debug)]
pub struct PacedRenderer<R> {
    inner: R,
    frame_delay: Duration,
}

impl<R: FrameRenderer> PacedRenderer<R> {
    pub fn new(inner: R, frame_delay: Duration) -> Self {
        PacedRenderer { inner, frame_delay }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: FrameRenderer> FrameRenderer for PacedRenderer<R> {
    fn render_frame(&mut self, grid: &ForestGrid, report: &TurnReport) {
        self.inner.render_frame(grid, report);
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::CellState;

    fn report(turn: u32) -> TurnReport {
        TurnReport {
            turn,
            ..TurnReport::default()
        }
    }

    #[test]
    fn test_closure_renderer() {
        let grid = ForestGrid::filled(2, 2, CellState::Flammable);
        let mut seen = 0;
        {
            let mut renderer = |g: &ForestGrid| seen += g.count(CellState::Flammable);
            renderer.render_frame(&grid, &report(1));
            renderer.render_frame(&grid, &report(2));
        }
        assert_eq!(seen, 8);
    }

    #[test]
    fn test_recorder_keeps_snapshots() {
        let mut recorder = FrameRecorder::new();
        let mut grid = ForestGrid::new(3, 1);

        recorder.render_frame(&grid, &report(1));
        grid.set(0, 0, CellState::Burnt);
        recorder.render_frame(&grid, &report(2));

        assert_eq!(recorder.frame_count(), 2);
        assert_eq!(recorder.frames()[0].get(0, 0), Some(CellState::Empty));
        assert_eq!(recorder.last_frame().unwrap().get(0, 0), Some(CellState::Burnt));
        assert_eq!(recorder.reports()[1].turn, 2);
    }

    #[test]
    fn test_paced_renderer_forwards_frames() {
        let mut paced = PacedRenderer::new(FrameRecorder::new(), Duration::ZERO);
        let grid = ForestGrid::new(1, 1);

        paced.render_frame(&grid, &report(1));

        assert_eq!(paced.into_inner().frame_count(), 1);
    }
}
