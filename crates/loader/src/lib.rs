//! Scene loading for stockgrid
//!
//! This crate provides:
//! - [`SceneLoader`]: scenes from JSON files, strings or URLs
//! - [`InventoryDocument`]: raw locations and packs, built into a scene
//! - Legacy location-list conversion ([`convert_legacy`])

mod document;
mod legacy;
mod loader;

pub use document::InventoryDocument;
pub use legacy::{convert_legacy, convert_legacy_str, infer_item_type};
pub use loader::{is_url, LoadError, SceneLoader};
