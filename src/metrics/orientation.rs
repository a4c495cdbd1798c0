//! Mesh orientation classification.

use std::fmt;

/// Winding of a structured mesh, as seen from the sign of its Jacobian.
///
/// A positive Jacobian determinant means the curvilinear axes (A, B) form a
/// right-handed pair in the Cartesian plane, so walking a grid cell in
/// increasing-index order traces it counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Negative Jacobian: cells wind clockwise.
    Clockwise,
    /// Positive Jacobian: cells wind counterclockwise.
    Counterclockwise,
}

impl Orientation {
    /// True for counterclockwise meshes.
    pub fn is_counterclockwise(&self) -> bool {
        matches!(self, Orientation::Counterclockwise)
    }

    /// True for clockwise meshes.
    pub fn is_clockwise(&self) -> bool {
        matches!(self, Orientation::Clockwise)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Clockwise => write!(f, "clockwise"),
            Orientation::Counterclockwise => write!(f, "counterclockwise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Orientation::Clockwise.to_string(), "clockwise");
        assert_eq!(Orientation::Counterclockwise.to_string(), "counterclockwise");
    }

    #[test]
    fn test_helpers() {
        assert!(Orientation::Counterclockwise.is_counterclockwise());
        assert!(!Orientation::Counterclockwise.is_clockwise());
        assert!(Orientation::Clockwise.is_clockwise());
        assert!(!Orientation::Clockwise.is_counterclockwise());
    }
}
