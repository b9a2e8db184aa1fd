//! Inventory documents: the raw records a scene is built from.

use rand::Rng;
use serde::{Deserialize, Serialize};
use stockgrid_core::{
    Dimensions, Inventory, LayoutConfig, LayoutResult, LocationRecord, PackRecord,
    PackRepository, WarehouseScene,
};
use stockgrid_layout::sample::PACK_SIZE;
use stockgrid_layout::{FloorPlan, PackPlanner, SampleWarehouse, SceneConverter};

use crate::loader::LoadError;

/// An inventory header, its locations and the packs stored in them.
///
/// Accepted either as this object or as a bare array of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,

    pub locations: Vec<LocationRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packs: Vec<PackRecord>,

    /// Size of every pack; the sample pack size when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_size: Option<Dimensions>,
}

impl InventoryDocument {
    /// A document holding only locations.
    pub fn from_locations(locations: Vec<LocationRecord>) -> Self {
        Self {
            inventory: None,
            locations,
            packs: Vec::new(),
            pack_size: None,
        }
    }

    /// The sample warehouse as a document.
    pub fn sample() -> Self {
        let sample = SampleWarehouse::new();
        Self {
            inventory: None,
            locations: sample.locations().to_vec(),
            packs: sample.packs().iter().cloned().collect(),
            pack_size: Some(PACK_SIZE),
        }
    }

    /// Parses a document from JSON.
    ///
    /// A top-level array is read as bare locations, anything else as the
    /// document object, so parse errors point at the offending field.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document = if json.trim_start().starts_with('[') {
            Self::from_locations(serde_json::from_str(json)?)
        } else {
            serde_json::from_str(json)?
        };
        if let Some(size) = &document.pack_size {
            size.validate("pack size")
                .map_err(|e| LoadError::InvalidFormat(e.to_string()))?;
        }
        Ok(document)
    }

    /// Converts the locations into a scene and lays the packs out on top.
    ///
    /// Returns the scene together with the layout's rejections.
    pub fn build_scene<R: Rng + ?Sized>(
        &self,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> (WarehouseScene, LayoutResult) {
        let converter = SceneConverter::new(config.clone());
        let scene = match &self.inventory {
            Some(inventory) => converter.convert_inventory(inventory, &self.locations),
            None => converter.convert(&self.locations),
        };

        let repository = PackRepository::new(self.packs.clone());
        let floor_plan = FloorPlan::from_locations(&self.locations);
        let mut layout = PackPlanner::new(config.clone()).place(
            &repository,
            &floor_plan,
            &self.pack_size.unwrap_or(PACK_SIZE),
            rng,
        );

        let placed = std::mem::take(&mut layout.items);
        (scene.merge_items(placed), layout)
    }
}
