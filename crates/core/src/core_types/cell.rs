//! Cell states for the forest grid
//!
//! Every cell of the terrain is in exactly one of five states. Four of them are
//! renderable; `PendingIgnite` only exists inside a single turn of the fire
//! propagation engine and is resolved before any frame is drawn.

use serde::{Deserialize, Serialize};

/// State of a single terrain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Non-flammable or cleared ground (water, rock, bare soil)
    #[default]
    Empty,
    /// Unburned vegetation that ignites when a burning neighbor reaches it
    Flammable,
    /// On fire this turn: spreads to its neighbors, then becomes `Burnt`
    Burning,
    /// Spent fuel. Terminal, never changes again
    Burnt,
    /// Caught fire from a neighbor during the current turn.
    /// Must not spread until the next turn.
    PendingIgnite,
}

impl CellState {
    /// All states in declaration order
    pub const ALL: [CellState; 5] = [
        CellState::Empty,
        CellState::Flammable,
        CellState::Burning,
        CellState::Burnt,
        CellState::PendingIgnite,
    ];

    /// Whether a renderer is allowed to observe this state
    #[inline]
    pub fn is_renderable(self) -> bool {
        !matches!(self, CellState::PendingIgnite)
    }

    /// Whether the cell is on fire, including fire that has not spread yet
    #[inline]
    pub fn is_on_fire(self) -> bool {
        matches!(self, CellState::Burning | CellState::PendingIgnite)
    }

    /// Display color as RGB.
    ///
    /// Water/cleared ground is royal blue, vegetation green, fire red and ash black.
    /// `PendingIgnite` shares the fire color; it should never reach a renderer anyway.
    pub fn color(self) -> [u8; 3] {
        match self {
            CellState::Empty => [65, 105, 225],
            CellState::Flammable => [0, 128, 0],
            CellState::Burning | CellState::PendingIgnite => [255, 0, 0],
            CellState::Burnt => [0, 0, 0],
        }
    }

    /// Single-character glyph for plain-text output
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '~',
            CellState::Flammable => 'T',
            CellState::Burning | CellState::PendingIgnite => '*',
            CellState::Burnt => '.',
        }
    }
}
