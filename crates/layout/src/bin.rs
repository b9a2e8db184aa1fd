//! Storage bins: the slots items are packed into.

use nalgebra::Vector3;
use stockgrid_core::{Aabb3, Dimensions, LocationRecord, Position, Result};

/// A fixed-size storage slot.
///
/// `origin` is the center of the floor on x/z and the floor level on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Floor center.
    origin: Position,

    /// Extent along x.
    width: f64,

    /// Extent along z.
    length: f64,

    /// Usable height, when known.
    height: Option<f64>,
}

impl Bin {
    /// Creates a bin of unbounded height.
    pub fn new(origin: Position, width: f64, length: f64) -> Self {
        Self {
            origin,
            width,
            length,
            height: None,
        }
    }

    /// Creates a bin covering a location's slot.
    pub fn from_location(location: &LocationRecord) -> Self {
        Self::new(
            location.position,
            location.dimensions.width,
            location.dimensions.length,
        )
        .with_height(location.dimensions.height)
    }

    /// Sets the usable height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn origin(&self) -> &Position {
        &self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// The minimum-x edge.
    pub fn left_edge(&self) -> f64 {
        self.origin.x - self.width / 2.0
    }

    /// The minimum-z edge.
    pub fn front_edge(&self) -> f64 {
        self.origin.z - self.length / 2.0
    }

    /// Checks whether a box centered at `center` (x/z) standing at `center.y`
    /// fits in the bin, allowing `tolerance`.
    ///
    /// The height is only checked when the bin has one.
    pub fn holds(&self, center: &Position, item: &Dimensions, tolerance: f64) -> bool {
        let top = self.height.unwrap_or(f64::INFINITY);
        let bin_box = Aabb3::new(
            Vector3::new(self.left_edge(), self.origin.y, self.front_edge()),
            Vector3::new(
                self.left_edge() + self.width,
                self.origin.y + top,
                self.front_edge() + self.length,
            ),
        );
        let item_box = Aabb3::from_origin_extent(
            Vector3::new(
                center.x - item.width / 2.0,
                center.y,
                center.z - item.length / 2.0,
            ),
            item.to_vector(),
        );
        bin_box.contains(&item_box, tolerance)
    }

    /// Validates the floor extents (and height, when set).
    pub fn validate(&self) -> Result<()> {
        Dimensions::new(self.width, self.length, self.height.unwrap_or(1.0)).validate("bin")
    }
}
