//! Inventory to scene conversion.
//!
//! Every location becomes one wireframe container item. The scene extent is
//! derived from the locations, never configured directly.

use stockgrid_core::{
    Aabb3, Dimensions, Inventory, ItemRecord, ItemType, LayoutConfig, LocationRecord,
    WarehouseScene,
};

/// Name of a scene converted without an inventory header.
pub const DEFAULT_SCENE_NAME: &str = "Warehouse";

/// Converts location records into a [`WarehouseScene`].
///
/// Pure: inputs are never modified, and converting the same input twice
/// yields equal scenes. Location extents are not validated here.
#[derive(Debug, Clone, Default)]
pub struct SceneConverter {
    config: LayoutConfig,
}

impl SceneConverter {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Converts `locations` into a scene named [`DEFAULT_SCENE_NAME`].
    pub fn convert(&self, locations: &[LocationRecord]) -> WarehouseScene {
        self.convert_named(DEFAULT_SCENE_NAME, locations)
    }

    /// Converts `locations` into a scene named after `inventory`.
    pub fn convert_inventory(
        &self,
        inventory: &Inventory,
        locations: &[LocationRecord],
    ) -> WarehouseScene {
        self.convert_named(inventory.name.clone(), locations)
    }

    fn convert_named(&self, name: impl Into<String>, locations: &[LocationRecord]) -> WarehouseScene {
        let items = locations.iter().map(location_item).collect();
        WarehouseScene::new(name, self.scene_extent(locations), items)
    }

    /// Bounding box of all locations plus the configured margins, or the
    /// default extent when there are none.
    pub fn scene_extent(&self, locations: &[LocationRecord]) -> Dimensions {
        let bounds = locations
            .iter()
            .map(|loc| {
                Aabb3::from_origin_extent(loc.position.to_vector(), loc.dimensions.to_vector())
            })
            .reduce(|acc, b| acc.union(&b));

        let Some(bounds) = bounds else {
            return self.config.default_extent;
        };

        let margin = self.config.scene_margin;
        Dimensions::new(
            bounds.max.x + margin.width,
            bounds.max.z + margin.length,
            bounds.max.y + margin.height,
        )
    }
}

/// The wireframe item standing for one location.
pub fn location_item(location: &LocationRecord) -> ItemRecord {
    ItemRecord::new(
        format!("LOC-{}", location.id),
        location.display_name(),
        ItemType::Container,
        location.position,
        location.dimensions,
    )
    .with_quantity(location.contents.unwrap_or(0.0))
    .with_weight(location.capacity.unwrap_or(0.0))
    .with_metadata(location.metadata())
}
