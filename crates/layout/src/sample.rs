//! A small two-inventory sample warehouse.
//!
//! Inventory 1 holds pallets on a single rack column at x = 0.6; inventory 2
//! holds numbered packs on two rack columns at x = 6.6 and 7.8. Both racks
//! have a floor level and a second level at y = 2.

use chrono::NaiveDate;
use rand::Rng;
use stockgrid_core::{
    Dimensions, Inventory, ItemType, LayoutConfig, LayoutResult, LocationRecord, PackRecord,
    PackRepository, Position, WarehouseScene,
};

use crate::bin::Bin;
use crate::convert::SceneConverter;
use crate::floor_plan::FloorPlan;
use crate::grid::{GridPacker, GridRequest};
use crate::planner::PackPlanner;

/// Every sample location: 1.2 wide, 1.0 long, 2.0 high.
pub const LOCATION_SIZE: Dimensions = Dimensions::new(1.2, 1.0, 2.0);

/// Sample pallet size.
pub const PALLET_SIZE: Dimensions = Dimensions::new(0.45, 0.38, 0.35);

/// Sample pack size.
pub const PACK_SIZE: Dimensions = Dimensions::new(0.14, 0.11, 0.15);

/// Colour of the sample pallets.
pub const PALLET_COLOR: &str = "#50C878";

/// Packs per location, for locations 201 to 210.
pub const PACK_COUNTS: [u32; 10] = [48, 32, 56, 24, 40, 64, 28, 52, 36, 44];

const PALLET_INVENTORY: i64 = 1;
const PACK_INVENTORY: i64 = 2;

/// The sample inventories, locations and packs.
#[derive(Debug, Clone)]
pub struct SampleWarehouse {
    inventories: Vec<Inventory>,
    locations: Vec<LocationRecord>,
    packs: PackRepository,
}

impl SampleWarehouse {
    /// Builds the sample data.
    pub fn new() -> Self {
        let inventories = vec![
            Inventory {
                id: PALLET_INVENTORY,
                name: "Pallet Storage".into(),
                code: Some("INV-001".into()),
            },
            Inventory {
                id: PACK_INVENTORY,
                name: "Pack Storage".into(),
                code: Some("INV-002".into()),
            },
        ];

        let mut locations = pallet_locations();
        locations.extend(pack_locations());

        Self {
            inventories,
            locations,
            packs: sample_packs().collect(),
        }
    }

    pub fn inventories(&self) -> &[Inventory] {
        &self.inventories
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    /// Locations of one inventory.
    pub fn locations_of(&self, inventory_id: i64) -> Vec<LocationRecord> {
        self.locations
            .iter()
            .filter(|loc| loc.inventory_id == inventory_id)
            .cloned()
            .collect()
    }

    pub fn packs(&self) -> &PackRepository {
        &self.packs
    }

    /// Floor plan over every sample location.
    pub fn floor_plan(&self) -> FloorPlan {
        FloorPlan::from_locations(&self.locations)
    }

    /// Grid requests for the 2x2 pallet grid on each pallet location.
    pub fn pallet_grids(&self) -> Vec<(Bin, GridRequest)> {
        self.locations
            .iter()
            .filter(|loc| loc.inventory_id == PALLET_INVENTORY)
            .map(|loc| {
                let request = GridRequest::new(format!("PALLET-{}", loc.id), ItemType::Pallet, PALLET_SIZE)
                    .with_name("Pallet")
                    .with_grid(2, 2)
                    .with_color(PALLET_COLOR)
                    .with_stock(loc.id, loc.material_id);
                (Bin::from_location(loc), request)
            })
            .collect()
    }

    /// Lays out all pallets and packs.
    pub fn layout<R: Rng + ?Sized>(&self, config: &LayoutConfig, rng: &mut R) -> LayoutResult {
        let grid = GridPacker::new(config.clone());
        let mut result = LayoutResult::new();

        for (bin, request) in self.pallet_grids() {
            result.merge(grid.pack(&bin, &request, rng));
        }

        let packs = PackPlanner::new(config.clone()).place(
            &self.packs,
            &self.floor_plan(),
            &PACK_SIZE,
            rng,
        );
        result.merge(packs);
        result
    }

    /// The full scene: location wireframes followed by pallets and packs.
    ///
    /// Rejected records are logged and left out.
    pub fn scene<R: Rng + ?Sized>(&self, config: &LayoutConfig, rng: &mut R) -> WarehouseScene {
        let layout = self.layout(config, rng);
        if !layout.all_placed() {
            log::warn!("sample layout rejected {} records", layout.rejected_count());
        }

        SceneConverter::new(config.clone())
            .convert(&self.locations)
            .merge_items(layout.into_items())
    }
}

impl Default for SampleWarehouse {
    fn default() -> Self {
        Self::new()
    }
}

/// The sample scene with the default configuration.
pub fn sample_scene<R: Rng + ?Sized>(rng: &mut R) -> WarehouseScene {
    SampleWarehouse::new().scene(&LayoutConfig::default(), rng)
}

fn pallet_locations() -> Vec<LocationRecord> {
    (0..10)
        .map(|i| {
            let id = 101 + i;
            let y = if i < 5 { 0.0 } else { 2.0 };
            let z = 0.5 + (i % 5) as f64;
            let code = format!("A1-R{:02}", i + 1);
            LocationRecord::new(id, code.clone(), Position::new(0.6, y, z), LOCATION_SIZE)
                .with_inventory(PALLET_INVENTORY)
                .with_code(code)
                .with_capacity(1000.0)
                .with_contents(4.0)
                .with_material(900 + id)
        })
        .collect()
}

fn pack_locations() -> Vec<LocationRecord> {
    (0..10)
        .map(|i| {
            let id = 201 + i;
            // Odd ids on the first column, even ids on the second.
            let x = if i % 2 == 0 { 6.6 } else { 7.8 };
            let (y, z) = if i < 6 {
                (0.0, 0.5 + (i / 2) as f64)
            } else {
                (2.0, 0.5 + ((i - 6) / 2) as f64)
            };
            let code = format!("B1-R{:02}", i + 1);
            LocationRecord::new(id, code.clone(), Position::new(x, y, z), LOCATION_SIZE)
                .with_inventory(PACK_INVENTORY)
                .with_code(code)
                .with_capacity(500.0)
                .with_contents(f64::from(PACK_COUNTS[i as usize]))
        })
        .collect()
}

/// Expiry date shared by each pair of pack locations.
fn expiry_for(location_id: i64) -> Option<NaiveDate> {
    let (year, month, day) = match location_id {
        201 | 202 => (2025, 12, 31),
        203 | 204 => (2026, 1, 31),
        205 | 206 => (2026, 2, 28),
        207 | 208 => (2026, 3, 31),
        209 | 210 => (2026, 4, 30),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn sample_packs() -> impl Iterator<Item = PackRecord> {
    (201..=210_i64).zip(PACK_COUNTS).flat_map(|(location_id, count)| {
        let expires = expiry_for(location_id);
        (1..=count).map(move |n| {
            let id = location_id * 100 + i64::from(n);
            let mut pack = PackRecord::new(id, n)
                .in_location(location_id)
                .in_inventory(PACK_INVENTORY)
                .with_code(format!("PACK-{location_id}-{n:03}"))
                .with_sscc(format!("00{id:016}"));
            pack.expires = expires;
            pack
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_locations() {
        let sample = SampleWarehouse::new();
        assert_eq!(sample.inventories().len(), 2);
        assert_eq!(sample.locations().len(), 20);
        assert_eq!(sample.locations_of(1).len(), 10);

        let loc_106 = sample.locations().iter().find(|l| l.id == 106).unwrap();
        assert_eq!(loc_106.position, Position::new(0.6, 2.0, 0.5));
        let loc_206 = sample.locations().iter().find(|l| l.id == 206).unwrap();
        assert_eq!(loc_206.position, Position::new(7.8, 0.0, 2.5));
        let loc_209 = sample.locations().iter().find(|l| l.id == 209).unwrap();
        assert_eq!(loc_209.position, Position::new(6.6, 2.0, 1.5));
    }

    #[test]
    fn test_sample_packs() {
        let sample = SampleWarehouse::new();
        assert_eq!(sample.packs().len(), PACK_COUNTS.iter().sum::<u32>() as usize);
        assert_eq!(sample.packs().by_location(206).len(), 64);

        let pack = sample.packs().by_id(20307).unwrap();
        assert_eq!(pack.number, 7);
        assert_eq!(pack.code.as_deref(), Some("PACK-203-007"));
        assert_eq!(pack.sscc.as_deref(), Some("000000000000020307"));
        assert_eq!(pack.expires, NaiveDate::from_ymd_opt(2026, 1, 31));
    }

    #[test]
    fn test_sample_scene() {
        let scene = sample_scene(&mut StdRng::seed_from_u64(42));
        let stats = scene.statistics();
        assert_eq!(stats.items_by_type[&ItemType::Container], 20);
        assert_eq!(stats.items_by_type[&ItemType::Pallet], 40);
        assert_eq!(stats.items_by_type[&ItemType::Pack], 424);
        assert!(scene.out_of_bounds(1e-9).is_empty());

        let pallet = scene.item("PALLET-110-1").unwrap();
        assert_eq!(pallet.metadata().and_then(|m| m.material_id()), Some(1010));
    }
}
