//! Shared geometric value types.
//!
//! Coordinates are meters in a right-handed layout: `x` is lateral, `y` is
//! vertical and `z` is depth.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in warehouse space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns this position offset by the given deltas.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Returns the position as a nalgebra vector.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Position {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Box extents: `width` along x, `length` along z, `height` along y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Dimensions {
    /// Creates new dimensions.
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.width * self.length * self.height
    }

    /// Returns the floor area (width x length).
    pub fn footprint(&self) -> f64 {
        self.width * self.length
    }

    /// Returns true if every extent is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.length > 0.0 && self.height > 0.0
    }

    /// Validates the dimensions, naming `subject` in the error.
    pub fn validate(&self, subject: &str) -> Result<()> {
        if !self.is_positive() {
            return Err(Error::InvalidDimensions {
                subject: subject.to_string(),
                width: self.width,
                length: self.length,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Returns the extents as a nalgebra vector in (x, y, z) order.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume_and_footprint() {
        let d = Dimensions::new(1.2, 1.0, 2.0);
        assert_relative_eq!(d.volume(), 2.4, epsilon = 1e-12);
        assert_relative_eq!(d.footprint(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(Dimensions::new(1.0, 1.0, 1.0).validate("ok").is_ok());

        let err = Dimensions::new(1.0, 0.0, 1.0).validate("LOC-7").unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { ref subject, .. } if subject == "LOC-7"));
        assert!(Dimensions::new(-1.0, 1.0, 1.0).validate("neg").is_err());
    }

    #[test]
    fn test_vector_axes() {
        // height is the vertical (y) axis
        let v = Dimensions::new(1.0, 3.0, 2.0).to_vector();
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));

        let p = Position::from(Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(p, Position::new(0.5, 1.5, 2.5));
        assert_eq!(p.offset(0.5, 0.0, -0.5), Position::new(1.0, 1.5, 2.0));
    }
}
