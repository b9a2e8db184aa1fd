//! Location layout table: where every known bin sits.

use std::collections::BTreeMap;

use stockgrid_core::{LocationRecord, Position};

use crate::bin::Bin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Floor geometry of one location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinLayout {
    /// Floor center on x/z, floor level on y.
    pub origin: Position,
    pub width: f64,
    pub length: f64,
    /// Usable height; unbounded when absent.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub height: Option<f64>,
}

impl BinLayout {
    pub fn new(origin: Position, width: f64, length: f64) -> Self {
        Self {
            origin,
            width,
            length,
            height: None,
        }
    }

    /// Sets the usable height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// The bin this layout describes.
    pub fn bin(&self) -> Bin {
        let bin = Bin::new(self.origin, self.width, self.length);
        match self.height {
            Some(height) => bin.with_height(height),
            None => bin,
        }
    }
}

/// Read-only `location id -> layout` table.
///
/// Built once and shared; iteration is in ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FloorPlan {
    layouts: BTreeMap<i64, BinLayout>,
}

impl FloorPlan {
    /// Creates an empty floor plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a floor plan from `(id, layout)` pairs. Later entries win.
    pub fn from_entries(entries: impl IntoIterator<Item = (i64, BinLayout)>) -> Self {
        Self {
            layouts: entries.into_iter().collect(),
        }
    }

    /// Builds a floor plan covering the given locations' slots.
    pub fn from_locations<'a>(locations: impl IntoIterator<Item = &'a LocationRecord>) -> Self {
        Self::from_entries(locations.into_iter().map(|loc| {
            (
                loc.id,
                BinLayout::new(loc.position, loc.dimensions.width, loc.dimensions.length)
                    .with_height(loc.dimensions.height),
            )
        }))
    }

    /// Exact-match lookup; `None` for unknown ids.
    pub fn lookup(&self, location_id: i64) -> Option<&BinLayout> {
        self.layouts.get(&location_id)
    }

    /// The bin of a known location.
    pub fn bin(&self, location_id: i64) -> Option<Bin> {
        self.lookup(location_id).map(BinLayout::bin)
    }

    /// Known location ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.layouts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &BinLayout)> {
        self.layouts.iter().map(|(id, layout)| (*id, layout))
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
