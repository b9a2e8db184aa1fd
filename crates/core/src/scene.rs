//! The warehouse scene: the aggregate handed to a renderer.

use std::collections::BTreeMap;

use crate::geometry::Dimensions;
use crate::item::{ItemRecord, ItemType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named scene with its overall extent and a flat, ordered item list.
///
/// The field names and shape are the interchange contract with the renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WarehouseScene {
    pub name: String,
    pub dimensions: Dimensions,
    pub items: Vec<ItemRecord>,
}

/// Aggregate figures about a scene.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SceneStatistics {
    pub total_items: usize,
    pub total_weight: f64,
    pub total_count: u64,
    /// Item counts per type; every type is present, possibly with zero.
    pub items_by_type: BTreeMap<ItemType, usize>,
    /// Mean item weight, 0 for an empty scene.
    pub average_weight: f64,
}

impl WarehouseScene {
    /// Creates a scene.
    pub fn new(name: impl Into<String>, dimensions: Dimensions, items: Vec<ItemRecord>) -> Self {
        Self {
            name: name.into(),
            dimensions,
            items,
        }
    }

    /// Returns a copy holding only items of the given types.
    pub fn filter_by_type(&self, types: &[ItemType]) -> WarehouseScene {
        self.filtered(|item| types.contains(&item.item_type()))
    }

    /// Returns a copy holding only items whose weight lies in `[min, max]`.
    pub fn filter_by_weight(&self, min: f64, max: f64) -> WarehouseScene {
        self.filtered(|item| item.weight() >= min && item.weight() <= max)
    }

    fn filtered(&self, keep: impl Fn(&ItemRecord) -> bool) -> WarehouseScene {
        WarehouseScene {
            name: self.name.clone(),
            dimensions: self.dimensions,
            items: self.items.iter().filter(|i| keep(i)).cloned().collect(),
        }
    }

    /// Returns the scene with `items` appended after the existing ones.
    pub fn merge_items(mut self, items: impl IntoIterator<Item = ItemRecord>) -> WarehouseScene {
        self.items.extend(items);
        self
    }

    /// Returns the scene renamed.
    pub fn with_name(mut self, name: impl Into<String>) -> WarehouseScene {
        self.name = name.into();
        self
    }

    /// Looks an item up by id.
    pub fn item(&self, id: &str) -> Option<&ItemRecord> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Computes scene statistics.
    pub fn statistics(&self) -> SceneStatistics {
        let total_items = self.items.len();
        let total_weight: f64 = self.items.iter().map(|i| i.weight()).sum();
        let total_count: u64 = self.items.iter().map(|i| u64::from(i.count())).sum();

        let mut items_by_type: BTreeMap<ItemType, usize> =
            ItemType::ALL.iter().map(|t| (*t, 0)).collect();
        for item in &self.items {
            *items_by_type.entry(item.item_type()).or_insert(0) += 1;
        }

        let average_weight = if total_items > 0 {
            total_weight / total_items as f64
        } else {
            0.0
        };

        SceneStatistics {
            total_items,
            total_weight,
            total_count,
            items_by_type,
            average_weight,
        }
    }

    /// Ids of items whose far corner (`position + dimensions`) exceeds the
    /// scene extent by more than `tolerance` on any axis.
    pub fn out_of_bounds(&self, tolerance: f64) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| {
                let far = item.extent();
                far.x > self.dimensions.width + tolerance
                    || far.y > self.dimensions.height + tolerance
                    || far.z > self.dimensions.length + tolerance
            })
            .map(|item| item.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use approx::assert_relative_eq;

    fn item(id: &str, item_type: ItemType, weight: f64, count: u32) -> ItemRecord {
        ItemRecord::new(
            id,
            id,
            item_type,
            Position::new(1.0, 0.0, 1.0),
            Dimensions::new(1.0, 1.0, 1.0),
        )
        .with_weight(weight)
        .with_count(count)
    }

    fn scene() -> WarehouseScene {
        WarehouseScene::new(
            "Test",
            Dimensions::new(10.0, 10.0, 5.0),
            vec![
                item("P1", ItemType::Pallet, 100.0, 10),
                item("K1", ItemType::Pack, 20.0, 15),
                item("K2", ItemType::Pack, 30.0, 5),
                item("L1", ItemType::Container, 0.0, 0),
            ],
        )
    }

    #[test]
    fn test_statistics() {
        let stats = scene().statistics();
        assert_eq!(stats.total_items, 4);
        assert_relative_eq!(stats.total_weight, 150.0);
        assert_eq!(stats.total_count, 30);
        assert_eq!(stats.items_by_type[&ItemType::Pack], 2);
        assert_eq!(stats.items_by_type[&ItemType::Product], 0);
        assert_relative_eq!(stats.average_weight, 37.5);
    }

    #[test]
    fn test_empty_statistics() {
        let empty = WarehouseScene::new("Empty", Dimensions::new(1.0, 1.0, 1.0), Vec::new());
        let stats = empty.statistics();
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.average_weight, 0.0);
    }

    #[test]
    fn test_filters() {
        let s = scene();
        let packs = s.filter_by_type(&[ItemType::Pack]);
        assert_eq!(packs.items.len(), 2);
        assert_eq!(packs.name, "Test");

        let mid = s.filter_by_weight(20.0, 30.0);
        let ids: Vec<&str> = mid.items.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["K1", "K2"]);

        // filtering never touches the source scene
        assert_eq!(s.items.len(), 4);
    }

    #[test]
    fn test_out_of_bounds() {
        let s = scene().merge_items(vec![ItemRecord::new(
            "FAR",
            "Far",
            ItemType::Product,
            Position::new(9.5, 0.0, 0.0),
            Dimensions::new(1.0, 1.0, 1.0),
        )]);
        assert_eq!(s.out_of_bounds(0.0), vec!["FAR"]);
        assert!(s.out_of_bounds(0.5).is_empty());
        assert!(s.item("K2").is_some());
    }
}
