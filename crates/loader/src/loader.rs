//! Scene loading from files, strings and URLs.

use std::fs;
use std::path::Path;

use stockgrid_core::WarehouseScene;
use thiserror::Error;

use crate::document::InventoryDocument;

/// Errors that can occur when loading scenes.
///
/// Nothing is ever substituted on failure; the error reaches the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid scene format: {0}")]
    InvalidFormat(String),
}

/// Loader for [`WarehouseScene`] JSON.
#[derive(Debug, Default)]
pub struct SceneLoader;

impl SceneLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Loads a scene from a JSON file.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<WarehouseScene, LoadError> {
        let content = fs::read_to_string(path)?;
        self.load_from_str(&content)
    }

    /// Parses a scene from a JSON string.
    pub fn load_from_str(&self, json: &str) -> Result<WarehouseScene, LoadError> {
        let scene: WarehouseScene = serde_json::from_str(json)?;
        check_scene(&scene)?;
        log::debug!("loaded scene '{}' with {} items", scene.name, scene.items.len());
        Ok(scene)
    }

    /// Fetches and parses a scene from a URL.
    ///
    /// Any non-2xx status is an error.
    pub fn load_from_source(&self, url: &str) -> Result<WarehouseScene, LoadError> {
        let json = fetch(url)?;
        self.load_from_str(&json)
    }

    /// Loads a scene from an `http(s)://` URL or a file path.
    pub fn load(&self, source: &str) -> Result<WarehouseScene, LoadError> {
        if is_url(source) {
            self.load_from_source(source)
        } else {
            self.load_from_file(source)
        }
    }

    /// Loads an inventory document (locations and packs) from a JSON file.
    pub fn load_document(&self, path: impl AsRef<Path>) -> Result<InventoryDocument, LoadError> {
        let content = fs::read_to_string(path)?;
        InventoryDocument::from_json(&content)
    }
}

/// Returns true for `http://` and `https://` sources.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub(crate) fn fetch(url: &str) -> Result<String, LoadError> {
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => LoadError::Status {
            url: url.to_string(),
            status,
        },
        other => LoadError::Http(other.to_string()),
    })?;

    response
        .into_string()
        .map_err(|e| LoadError::Http(e.to_string()))
}

fn check_scene(scene: &WarehouseScene) -> Result<(), LoadError> {
    if !scene.dimensions.is_positive() {
        return Err(LoadError::InvalidFormat(format!(
            "scene '{}' has non-positive dimensions",
            scene.name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockgrid_core::ItemType;

    const SCENE: &str = r##"{
        "name": "Test Warehouse",
        "dimensions": { "width": 20, "length": 15, "height": 6 },
        "items": [
            {
                "id": "PALLET-101-1",
                "name": "Pallet 1",
                "type": "pallet",
                "position": { "x": 0.365, "y": 0.01, "z": 0.29 },
                "dimensions": { "width": 0.45, "length": 0.38, "height": 0.35 },
                "count": 12,
                "weight": 80,
                "color": "#50C878",
                "metadata": { "locationId": 101, "materialId": 1001 }
            },
            {
                "id": "LOC-201",
                "name": "B1-R01",
                "type": "container",
                "position": { "x": 6.6, "y": 0, "z": 0.5 },
                "dimensions": { "width": 1.2, "length": 1.0, "height": 2.0 },
                "count": 48,
                "weight": 500
            }
        ]
    }"##;

    #[test]
    fn test_load_from_str() {
        let scene = SceneLoader::new().load_from_str(SCENE).unwrap();
        assert_eq!(scene.name, "Test Warehouse");
        assert_eq!(scene.items.len(), 2);
        assert_eq!(scene.items[0].item_type(), ItemType::Pallet);
        assert_eq!(
            scene.items[0].metadata().and_then(|m| m.material_id()),
            Some(1001)
        );
        assert!(scene.items[1].metadata().is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = SceneLoader::new().load_from_str("{ \"name\": ").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let json = SCENE.replace("\"pallet\"", "\"crate\"");
        assert!(SceneLoader::new().load_from_str(&json).is_err());
    }

    #[test]
    fn test_zero_extent_is_invalid() {
        let json = SCENE.replace("\"width\": 20", "\"width\": 0");
        let err = SceneLoader::new().load_from_str(&json).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SceneLoader::new()
            .load_from_file("/nonexistent/stockgrid/scene.json")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/scene.json"));
        assert!(is_url("http://localhost:8080/scene"));
        assert!(!is_url("scene.json"));
        assert!(!is_url("/tmp/http.json"));
    }
}
