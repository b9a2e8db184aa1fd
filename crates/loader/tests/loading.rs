//! Integration tests for stockgrid-loader.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use stockgrid_core::{ItemType, LayoutConfig};
use stockgrid_layout::sample_scene;
use stockgrid_loader::{convert_legacy_str, InventoryDocument, LoadError, SceneLoader};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stockgrid-{}-{}", std::process::id(), name))
}

#[test]
fn test_scene_file_round_trip() {
    let scene = sample_scene(&mut StdRng::seed_from_u64(17));
    let path = temp_path("scene.json");
    std::fs::write(&path, serde_json::to_string_pretty(&scene).unwrap()).unwrap();

    let loaded = SceneLoader::new().load(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, scene);
    assert_eq!(loaded.statistics(), scene.statistics());
}

#[test]
fn test_scene_json_keeps_interchange_names() {
    let scene = sample_scene(&mut StdRng::seed_from_u64(0));
    let json = serde_json::to_value(&scene).unwrap();

    let pack = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "PACK-201-001")
        .unwrap();
    assert_eq!(pack["type"], "pack");
    assert_eq!(pack["metadata"]["packNumber"], 1);
    assert_eq!(pack["metadata"]["SSCC"], "000000000000020101");
    assert_eq!(pack["metadata"]["expireDate"], "2025-12-31");

    let location = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == "LOC-101")
        .unwrap();
    assert_eq!(location["type"], "container");
    assert_eq!(location["metadata"]["locationName"], "A1-R01");
}

#[test]
fn test_document_file_to_scene() {
    let path = temp_path("document.json");
    let document = InventoryDocument::sample();
    std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    let loaded = SceneLoader::new().load_document(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let (scene, result) = loaded.build_scene(&LayoutConfig::default(), &mut StdRng::seed_from_u64(1));
    assert!(result.all_placed());
    let stats = scene.statistics();
    assert_eq!(stats.items_by_type[&ItemType::Container], 20);
    assert_eq!(stats.items_by_type[&ItemType::Pack], 424);
}

#[test]
fn test_legacy_then_filter() {
    let json = r#"{
        "name": "Legacy",
        "locations": [
            { "id": 1, "capacity": 2000 },
            { "id": 2, "capacity": 800 },
            { "id": 3, "capacity": 150 },
            { "id": 4, "capacity": 20 }
        ]
    }"#;
    let scene = convert_legacy_str(json).unwrap();
    let types: Vec<ItemType> = scene.items.iter().map(|i| i.item_type()).collect();
    assert_eq!(
        types,
        vec![
            ItemType::Pallet,
            ItemType::Container,
            ItemType::Pack,
            ItemType::Product
        ]
    );

    let heavy = scene.filter_by_weight(150.0, 2000.0);
    assert_eq!(heavy.items.len(), 3);
    let stats = scene.statistics();
    assert_eq!(stats.total_count, 4);
    assert!((stats.average_weight - 742.5).abs() < 1e-9);
}

#[test]
fn test_unreachable_source_is_an_error() {
    let err = SceneLoader::new()
        .load_from_source("http://127.0.0.1:9/scene.json")
        .unwrap_err();
    assert!(matches!(err, LoadError::Http(_)));
}
