//! Grid storage and terrain generation

pub mod forest_grid;
pub mod terrain;

// Re-export main types
pub use forest_grid::*;
pub use terrain::*;
