//! Error types for cloth configuration and mesh construction.

use core::fmt;

/// Errors raised while validating configuration or addressing the mesh.
///
/// Tears and cuts are not errors; they are normal outcomes of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid resolution must be at least 1.
    InvalidQuality,
    /// Simulation frequency must be positive and finite.
    InvalidFrequency,
    /// Viewport width and height must be positive and finite.
    InvalidViewport,
    /// Tear multiplier must be finite and at least 1.
    InvalidTearMultiplier,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Radii and drag strength must be non-negative; gravity and padding finite.
    InvalidInteraction,
    /// Maximum frame delta must be positive.
    InvalidFrameClamp,
    /// Grid dimensions must be at least 1x1.
    InvalidGridDimensions,
    /// Grid cell lies outside the mesh.
    CellOutOfBounds { col: usize, row: usize, cols: usize, rows: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidQuality => write!(f, "grid resolution must be at least 1"),
            ClothError::InvalidFrequency => write!(f, "simulation frequency must be positive"),
            ClothError::InvalidViewport => write!(f, "viewport dimensions must be positive"),
            ClothError::InvalidTearMultiplier => write!(f, "tear multiplier must be at least 1"),
            ClothError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ClothError::InvalidInteraction => {
                write!(f, "radii and drag strength must be non-negative, gravity and padding finite")
            }
            ClothError::InvalidFrameClamp => write!(f, "maximum frame delta must be positive"),
            ClothError::InvalidGridDimensions => write!(f, "grid must be at least 1x1"),
            ClothError::CellOutOfBounds { col, row, cols, rows } => {
                write!(f, "cell ({}, {}) out of bounds for {}x{} grid", col, row, cols, rows)
            }
        }
    }
}
