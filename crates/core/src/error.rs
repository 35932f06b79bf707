//! Validation errors for simulation parameters
//!
//! The generator and the propagation engine have no failure path of their own;
//! they rely on their inputs having passed [`SimulationConfig::validate`] first.
//!
//! [`SimulationConfig::validate`]: crate::config::SimulationConfig::validate

use std::fmt;

/// Reasons a [`SimulationConfig`](crate::config::SimulationConfig) is rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero
    ZeroDimension {
        /// Which dimension (`"width"` or `"height"`)
        name: &'static str,
    },
    /// Density is NaN or outside `[0, 1]`
    DensityOutOfRange { value: f64 },
    /// `width * height` does not fit in `usize`
    GridTooLarge { width: usize, height: usize },
    /// Cell data does not fill a `width x height` grid
    CellCountMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension { name } => {
                write!(f, "Grid parameter {name}: must be positive, got 0")
            }
            ConfigError::DensityOutOfRange { value } => {
                write!(f, "Density must be within [0, 1], got {value}")
            }
            ConfigError::GridTooLarge { width, height } => {
                write!(f, "Grid of {width}x{height} cells is too large")
            }
            ConfigError::CellCountMismatch {
                width,
                height,
                cells,
            } => {
                let expected = width.saturating_mul(*height);
                write!(f, "Grid of {width}x{height} needs {expected} cells, got {cells}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroDimension { name: "width" }.to_string(),
            "Grid parameter width: must be positive, got 0"
        );
        assert_eq!(
            ConfigError::DensityOutOfRange { value: 1.5 }.to_string(),
            "Density must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_cell_count_message() {
        let err = ConfigError::CellCountMismatch {
            width: 3,
            height: 3,
            cells: 2,
        };
        assert_eq!(err.to_string(), "Grid of 3x3 needs 9 cells, got 2");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::GridTooLarge {
            width: usize::MAX,
            height: 2,
        });
        assert!(err.to_string().contains("too large"));
    }
}
