//! # stockgrid layout
//!
//! Layout algorithms that turn warehouse records into positioned items.
//!
//! - [`GridPacker`]: identical items in a centered grid, optionally layered
//! - [`SequentialPacker`]: numbered packs filled row by row, level by level
//! - [`FloorPlan`]: the location layout table
//! - [`SceneConverter`]: locations to a [`WarehouseScene`]
//! - [`PackPlanner`]: sequential packing across a whole floor plan
//! - [`SampleWarehouse`]: a small generated warehouse
//!
//! Positions are deterministic. The only randomness is the presentational
//! `count`/`weight` on generated stock, drawn from a caller-supplied [`rand::Rng`].

pub mod bin;
pub mod convert;
pub mod floor_plan;
pub mod grid;
pub mod planner;
pub mod presentation;
pub mod sample;
pub mod sequential;

// Re-exports
pub use bin::Bin;
pub use convert::{location_item, SceneConverter, DEFAULT_SCENE_NAME};
pub use floor_plan::{BinLayout, FloorPlan};
pub use grid::{GridCell, GridPacker, GridRequest};
pub use planner::{place_packs, PackPlanner};
pub use presentation::Presentation;
pub use sample::{sample_scene, SampleWarehouse};
pub use sequential::{LevelCapacity, SequentialPacker, Slot};
pub use stockgrid_core::{Error, LayoutConfig, LayoutResult, Result, WarehouseScene};
