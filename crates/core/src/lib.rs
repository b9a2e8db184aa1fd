//! # stockgrid core
//!
//! Value types, records and the scene model shared by the stockgrid layout
//! engine and its loaders.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Position`], [`Dimensions`], [`Aabb3`]
//! - **Records**: [`ItemRecord`], [`LocationRecord`], [`PackRecord`] and the
//!   [`ItemMetadata`] union
//! - **Scene**: [`WarehouseScene`], the aggregate consumed by renderers
//! - **Repository**: [`PackRepository`], a read-only pack index
//! - **Layout plumbing**: [`LayoutConfig`], [`LayoutResult`], [`Error`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod bounds;
pub mod config;
pub mod date;
pub mod error;
pub mod geometry;
pub mod item;
pub mod location;
pub mod metadata;
pub mod pack;
pub mod repository;
pub mod result;
pub mod scene;

// Re-exports
pub use bounds::Aabb3;
pub use config::{BoundsMode, DuplicatePolicy, LayoutConfig, SceneMargin};
pub use date::parse_date;
pub use error::{Error, Result};
pub use geometry::{Dimensions, Position};
pub use item::{ItemRecord, ItemType};
pub use location::{Inventory, LocationRecord};
pub use metadata::{ItemMetadata, LocationMetadata, PackMetadata, StockMetadata};
pub use pack::PackRecord;
pub use repository::PackRepository;
pub use result::{LayoutResult, Rejection, Subject};
pub use scene::{SceneStatistics, WarehouseScene};
