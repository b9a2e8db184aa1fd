//! Storage locations and their owning inventories.

use crate::geometry::{Dimensions, Position};
use crate::metadata::LocationMetadata;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An inventory: a named group of locations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Inventory {
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub code: Option<String>,
}

impl Inventory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: None,
        }
    }
}

/// One physical storage slot.
///
/// `position` is the slot center on x/z and its base on y. On the wire the
/// coordinates and extents are flat fields (`x`, `y`, `z`, `width`, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory_id: i64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub code: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub dimensions: Dimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_sequence: i32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub capacity: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contents: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: i32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub material_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub po_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub batch: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lot_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub order_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub job_time: Option<String>,
}

impl LocationRecord {
    /// Creates a location with the given geometry and every optional field unset.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        position: Position,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            inventory_id: 0,
            code: None,
            position,
            dimensions,
            use_sequence: 0,
            capacity: None,
            contents: None,
            status: 0,
            material_id: None,
            po_id: None,
            batch: None,
            lot_id: None,
            order_id: None,
            job_time: None,
        }
    }

    /// Sets the owning inventory.
    pub fn with_inventory(mut self, inventory_id: i64) -> Self {
        self.inventory_id = inventory_id;
        self
    }

    /// Sets the location code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the current contents.
    pub fn with_contents(mut self, contents: f64) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Sets the material linkage.
    pub fn with_material(mut self, material_id: i64) -> Self {
        self.material_id = Some(material_id);
        self
    }

    /// Display name: the name, or `Location {code}` when the name is empty.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Location {}", self.code.as_deref().unwrap_or_default())
        } else {
            self.name.clone()
        }
    }

    /// Metadata carried by this location's wireframe item.
    pub fn metadata(&self) -> LocationMetadata {
        LocationMetadata {
            location_id: Some(self.id),
            location_name: Some(self.name.clone()),
            code: self.code.clone(),
            description: self.description.clone(),
            status: Some(self.status),
            material_id: self.material_id,
            batch: self.batch.map(|b| b.to_string()),
            lot_id: self.lot_id,
            order_id: self.order_id,
            job_time: self.job_time.clone(),
        }
    }

    /// Checks that the slot has positive extents.
    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate(&format!("location {}", self.id))
    }
}
