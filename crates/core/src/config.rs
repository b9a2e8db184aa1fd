//! Layout configuration.

use crate::geometry::Dimensions;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with packs whose sequence number repeats inside a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Keep the pack with the lowest id, report the others as rejected.
    #[default]
    Skip,
    /// Fail the whole location.
    Reject,
}

/// Whether grid layout checks cells against the bin footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundsMode {
    /// No check; a grid may overflow its bin.
    #[default]
    Unchecked,
    /// Cells whose footprint leaves the bin are rejected.
    ClampToBin,
}

/// Margins added around the location extents when sizing a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneMargin {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Default for SceneMargin {
    fn default() -> Self {
        Self {
            width: 5.0,
            length: 5.0,
            height: 2.0,
        }
    }
}

/// Common configuration for the layout algorithms and the scene converter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Gap between neighbouring items.
    pub spacing: f64,

    /// Lift above the bin floor for grid items.
    pub floor_lift: f64,

    /// Margins around the location extents.
    pub scene_margin: SceneMargin,

    /// Scene size used when there are no locations.
    pub default_extent: Dimensions,

    /// Handling of repeated sequence numbers.
    pub duplicate_policy: DuplicatePolicy,

    /// Grid bounds checking.
    pub bounds_mode: BoundsMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 0.02,
            floor_lift: 0.01,
            scene_margin: SceneMargin::default(),
            default_extent: Dimensions::new(50.0, 50.0, 10.0),
            duplicate_policy: DuplicatePolicy::default(),
            bounds_mode: BoundsMode::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spacing between items.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the floor lift for grid items.
    pub fn with_floor_lift(mut self, lift: f64) -> Self {
        self.floor_lift = lift;
        self
    }

    /// Sets the scene margins.
    pub fn with_scene_margin(mut self, width: f64, length: f64, height: f64) -> Self {
        self.scene_margin = SceneMargin {
            width,
            length,
            height,
        };
        self
    }

    /// Sets the scene size used for an empty location list.
    pub fn with_default_extent(mut self, extent: Dimensions) -> Self {
        self.default_extent = extent;
        self
    }

    /// Sets the duplicate sequence number policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the grid bounds mode.
    pub fn with_bounds_mode(mut self, mode: BoundsMode) -> Self {
        self.bounds_mode = mode;
        self
    }

    /// Validates the numeric settings.
    pub fn validate(&self) -> Result<()> {
        if self.spacing < 0.0 || !self.spacing.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "spacing must be a non-negative number, got {}",
                self.spacing
            )));
        }
        if self.floor_lift < 0.0 || !self.floor_lift.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "floor lift must be a non-negative number, got {}",
                self.floor_lift
            )));
        }
        let m = self.scene_margin;
        if m.width < 0.0 || m.length < 0.0 || m.height < 0.0 {
            return Err(Error::InvalidConfig("scene margins cannot be negative".into()));
        }
        self.default_extent.validate("default scene extent")
    }
}
