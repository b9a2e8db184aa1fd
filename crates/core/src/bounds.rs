//! Axis-aligned bounding boxes.

use nalgebra::{RealField, Vector3};

/// A 3D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3<S> {
    /// Minimum corner.
    pub min: Vector3<S>,
    /// Maximum corner.
    pub max: Vector3<S>,
}

impl<S: RealField + Copy> Aabb3<S> {
    /// Creates a new AABB from min/max corners.
    pub fn new(min: Vector3<S>, max: Vector3<S>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from an origin and an extent.
    pub fn from_origin_extent(origin: Vector3<S>, extent: Vector3<S>) -> Self {
        Self::new(origin, origin + extent)
    }

    /// Checks if `other` lies entirely inside this AABB, allowing `tolerance`.
    pub fn contains(&self, other: &Self, tolerance: S) -> bool {
        other.min.x >= self.min.x - tolerance
            && other.min.y >= self.min.y - tolerance
            && other.min.z >= self.min.z - tolerance
            && other.max.x <= self.max.x + tolerance
            && other.max.y <= self.max.y + tolerance
            && other.max.z <= self.max.z + tolerance
    }

    /// Returns the union (bounding box) of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let a = Aabb3::from_origin_extent(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0));
        let b = Aabb3::from_origin_extent(Vector3::new(1.0, 0.0, 1.0), Vector3::new(1.0, 2.0, 1.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vector3::zeros());
        assert_eq!(u.max, Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_contains_with_tolerance() {
        let outer = Aabb3::from_origin_extent(Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0));
        let inner = Aabb3::from_origin_extent(Vector3::new(0.5, 0.0, 0.5), Vector3::new(0.5, 1.0, 0.51));
        assert!(!outer.contains(&inner, 0.0));
        assert!(outer.contains(&inner, 0.02));
    }
}
