//! # stockgrid
//!
//! Warehouse layout engine: turns inventory records into a renderable 3D scene.
//!
//! This crate provides:
//! - **Records**: locations, packs and the items a renderer draws
//! - **Layout**: deterministic grid and sequential packing inside storage bins
//! - **Scenes**: conversion of locations into a [`WarehouseScene`] plus queries
//! - **Loading**: scenes from files, URLs and the legacy location-list format
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use stockgrid::layout::SampleWarehouse;
//! use stockgrid::LayoutConfig;
//!
//! let sample = SampleWarehouse::new();
//! let scene = sample.scene(&LayoutConfig::default(), &mut StdRng::seed_from_u64(7));
//! println!("{} items", scene.items.len());
//! ```
//!
//! ## Feature Flags
//!
//! - `layout` (default): packing algorithms and scene conversion
//! - `loader` (default): JSON loading and legacy conversion
//! - `serde` (default): Serialization support

/// Value types, records and the scene model.
pub use stockgrid_core as core;

/// Packing algorithms and scene conversion.
#[cfg(feature = "layout")]
pub use stockgrid_layout as layout;

/// Scene loading.
#[cfg(feature = "loader")]
pub use stockgrid_loader as loader;

// Re-export commonly used types at root level
pub use stockgrid_core::{
    Dimensions, Error, ItemMetadata, ItemRecord, ItemType, LayoutConfig, LayoutResult,
    LocationRecord, PackRecord, PackRepository, Position, Result, WarehouseScene,
};
