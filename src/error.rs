//! Error types for narrow-phase detection.

use crate::collision::shapes::collision_shape::ShapeKind;
use thiserror::Error;

/// Failures that must reach the simulation step.
///
/// A pair that simply does not overlap is not an error, detection returns
/// `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// No native algorithm exists for this pairing of shape kinds.
    #[error("no collision algorithm for shape pair {shape0:?} x {shape1:?}")]
    UnsupportedShapePair {
        /// Kind of the first body's shape.
        shape0: ShapeKind,
        /// Kind of the second body's shape.
        shape1: ShapeKind,
    },

    /// Geometry or physical parameters that would poison the solver.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A fixed-size point buffer would have been overrun.
    #[error("contact buffer capacity of {capacity} points exceeded")]
    CapacityOverflow {
        /// The buffer capacity.
        capacity: usize,
    },
}

/// Result type for detection operations.
pub type CollisionResult<T> = std::result::Result<T, CollisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollisionError::UnsupportedShapePair {
            shape0: ShapeKind::Rect,
            shape1: ShapeKind::Circle,
        };
        assert_eq!(
            format!("{err}"),
            "no collision algorithm for shape pair Rect x Circle"
        );

        let err = CollisionError::CapacityOverflow { capacity: 16 };
        assert!(format!("{err}").contains("16"));

        let err = CollisionError::DegenerateInput("mass is NaN".to_string());
        assert!(format!("{err}").ends_with("mass is NaN"));
    }
}
