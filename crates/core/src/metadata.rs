//! Typed metadata attached to renderable items.
//!
//! Renderers read these fields opportunistically for hover text; the shapes
//! below are the only ones the engine produces. With the `serde` feature the
//! union is untagged so the JSON form stays a flat camelCase object.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata for stock placed on a location by grid layout (pallets).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct StockMetadata {
    pub location_id: i64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub material_id: Option<i64>,
}

/// Metadata for a tracked pack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackMetadata {
    pub pack_id: i64,
    pub pack_number: u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pack_code: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub inventory_id: Option<i64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SSCC", default, skip_serializing_if = "Option::is_none")
    )]
    pub sscc: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::date::deserialize_opt"
        )
    )]
    pub expire_date: Option<NaiveDate>,
}

/// Metadata for a location wireframe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LocationMetadata {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub code: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub status: Option<i32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub material_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub batch: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lot_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub order_id: Option<i64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub job_time: Option<String>,
}

/// Known metadata shapes.
///
/// Variant order matters for untagged deserialization: the strict stock shape
/// first, then packs (which require `packId`), then the lenient location shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemMetadata {
    Stock(StockMetadata),
    Pack(PackMetadata),
    Location(LocationMetadata),
}

impl ItemMetadata {
    /// Returns the owning location id, when known.
    pub fn location_id(&self) -> Option<i64> {
        match self {
            ItemMetadata::Stock(m) => Some(m.location_id),
            ItemMetadata::Pack(m) => m.location_id,
            ItemMetadata::Location(m) => m.location_id,
        }
    }

    /// Returns the material id, when known.
    pub fn material_id(&self) -> Option<i64> {
        match self {
            ItemMetadata::Stock(m) => m.material_id,
            ItemMetadata::Pack(_) => None,
            ItemMetadata::Location(m) => m.material_id,
        }
    }
}

impl From<StockMetadata> for ItemMetadata {
    fn from(m: StockMetadata) -> Self {
        ItemMetadata::Stock(m)
    }
}

impl From<PackMetadata> for ItemMetadata {
    fn from(m: PackMetadata) -> Self {
        ItemMetadata::Pack(m)
    }
}

impl From<LocationMetadata> for ItemMetadata {
    fn from(m: LocationMetadata) -> Self {
        ItemMetadata::Location(m)
    }
}
