//! Legacy location-list format.
//!
//! Older exports are a `{ name, dimensions, locations: [...] }` object where
//! every field is optional and zero counts as missing.

use serde::Deserialize;
use serde_json::Value;
use stockgrid_core::{
    Dimensions, ItemRecord, ItemType, LocationMetadata, Position, WarehouseScene,
};

use crate::loader::LoadError;

const DEFAULT_NAME: &str = "Warehouse";
const DEFAULT_EXTENT: f64 = 50.0;
const DEFAULT_HEIGHT: f64 = 10.0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLegacyScene {
    name: Option<Value>,
    dimensions: Option<RawLegacyDimensions>,
    locations: Option<Vec<RawLegacyLocation>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLegacyDimensions {
    width: Option<Value>,
    length: Option<Value>,
    height: Option<Value>,
}

/// Fields are read loosely: old exports mix numbers and strings freely.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawLegacyLocation {
    id: Option<Value>,
    name: Option<Value>,
    code: Option<Value>,
    status: Option<Value>,
    material_id: Option<Value>,
    batch: Option<Value>,
    x: Option<Value>,
    y: Option<Value>,
    z: Option<Value>,
    width: Option<Value>,
    length: Option<Value>,
    height: Option<Value>,
    capacity: Option<Value>,
    contents: Option<Value>,
}

/// A string, or the text of a number or boolean.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A number, or a string holding one.
fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// An integral number, or a string holding one.
fn integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Treats zero like a missing value.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Picks an item type from a legacy location's capacity and height.
///
/// Capacity above 1000 or height above 2 means a pallet, then capacity above
/// 500 a container, above 100 a pack; anything else is a product.
pub fn infer_item_type(capacity: Option<f64>, height: Option<f64>) -> ItemType {
    let capacity = present(capacity).unwrap_or(0.0);
    let height = present(height).unwrap_or(1.0);

    if capacity > 1000.0 || height > 2.0 {
        ItemType::Pallet
    } else if capacity > 500.0 {
        ItemType::Container
    } else if capacity > 100.0 {
        ItemType::Pack
    } else {
        ItemType::Product
    }
}

/// Converts a legacy JSON value into a scene.
pub fn convert_legacy(value: Value) -> Result<WarehouseScene, LoadError> {
    if !value.is_object() {
        return Err(LoadError::InvalidFormat(
            "legacy data must be a JSON object".to_string(),
        ));
    }
    let raw: RawLegacyScene = serde_json::from_value(value)?;

    let dims = raw.dimensions.unwrap_or_default();
    let dimensions = Dimensions::new(
        present(number(dims.width.as_ref())).unwrap_or(DEFAULT_EXTENT),
        present(number(dims.length.as_ref())).unwrap_or(DEFAULT_EXTENT),
        present(number(dims.height.as_ref())).unwrap_or(DEFAULT_HEIGHT),
    );

    let items = raw
        .locations
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, loc)| legacy_item(index + 1, loc))
        .collect();

    let name = text(raw.name.as_ref())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    Ok(WarehouseScene::new(name, dimensions, items))
}

/// Parses and converts a legacy JSON string.
pub fn convert_legacy_str(json: &str) -> Result<WarehouseScene, LoadError> {
    convert_legacy(serde_json::from_str(json)?)
}

fn legacy_item(n: usize, loc: RawLegacyLocation) -> ItemRecord {
    let id = match &loc.id {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(num)) => num.to_string(),
        _ => format!("ITEM-{}", n),
    };
    let name = text(loc.name.as_ref())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Item {}", n));

    let capacity = number(loc.capacity.as_ref());
    let height = number(loc.height.as_ref());
    let item_type = infer_item_type(capacity, height);
    let position = Position::new(
        number(loc.x.as_ref()).unwrap_or(0.0),
        number(loc.y.as_ref()).unwrap_or(0.0),
        number(loc.z.as_ref()).unwrap_or(0.0),
    );
    let dimensions = Dimensions::new(
        present(number(loc.width.as_ref())).unwrap_or(1.0),
        present(number(loc.length.as_ref())).unwrap_or(1.0),
        present(height).unwrap_or(1.0),
    );

    let status = integer(loc.status.as_ref()).and_then(|s| i32::try_from(s).ok());
    if status.is_none() {
        if let Some(raw) = loc.status.as_ref().filter(|v| !v.is_null()) {
            log::warn!("legacy location {}: non-numeric status {} dropped", id, raw);
        }
    }

    ItemRecord::new(id, name, item_type, position, dimensions)
        .with_quantity(present(number(loc.contents.as_ref())).unwrap_or(1.0))
        .with_weight(capacity.unwrap_or(0.0))
        .with_metadata(LocationMetadata {
            code: text(loc.code.as_ref()),
            status,
            material_id: integer(loc.material_id.as_ref()),
            batch: text(loc.batch.as_ref()),
            ..LocationMetadata::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;
    use stockgrid_core::ItemMetadata;

    #[test]
    fn test_infer_item_type() {
        assert_eq!(infer_item_type(Some(1500.0), Some(1.0)), ItemType::Pallet);
        assert_eq!(infer_item_type(Some(10.0), Some(2.5)), ItemType::Pallet);
        assert_eq!(infer_item_type(Some(800.0), Some(2.0)), ItemType::Container);
        assert_eq!(infer_item_type(Some(200.0), None), ItemType::Pack);
        assert_eq!(infer_item_type(Some(100.0), None), ItemType::Product);
        assert_eq!(infer_item_type(None, None), ItemType::Product);
    }

    #[test]
    fn test_defaults() {
        let scene = convert_legacy(json!({ "locations": [{}] })).unwrap();
        assert_eq!(scene.name, "Warehouse");
        assert_eq!(scene.dimensions, Dimensions::new(50.0, 50.0, 10.0));

        let item = &scene.items[0];
        assert_eq!(item.id(), "ITEM-1");
        assert_eq!(item.name(), "Item 1");
        assert_eq!(item.item_type(), ItemType::Product);
        assert_eq!(*item.position(), Position::origin());
        assert_eq!(*item.dimensions(), Dimensions::new(1.0, 1.0, 1.0));
        assert_eq!(item.count(), 1);
        assert_relative_eq!(item.weight(), 0.0);
    }

    #[test]
    fn test_full_location() {
        let scene = convert_legacy(json!({
            "name": "North Hall",
            "dimensions": { "width": 30, "length": 0, "height": 8 },
            "locations": [{
                "id": 42,
                "name": "R-42",
                "code": "A1-42",
                "status": 1,
                "materialId": 1001,
                "batch": 7,
                "x": 1.5, "y": 0, "z": 2.5,
                "width": 1.2, "length": 1.0, "height": 2.0,
                "capacity": 1200,
                "contents": 6
            }]
        }))
        .unwrap();

        assert_eq!(scene.name, "North Hall");
        assert_eq!(scene.dimensions, Dimensions::new(30.0, 50.0, 8.0));

        let item = &scene.items[0];
        assert_eq!(item.id(), "42");
        assert_eq!(item.item_type(), ItemType::Pallet);
        assert_eq!(item.count(), 6);
        assert_relative_eq!(item.weight(), 1200.0);
        match item.metadata() {
            Some(ItemMetadata::Location(m)) => {
                assert_eq!(m.code.as_deref(), Some("A1-42"));
                assert_eq!(m.status, Some(1));
                assert_eq!(m.material_id, Some(1001));
                assert_eq!(m.batch.as_deref(), Some("7"));
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn test_loosely_typed_fields() {
        let scene = convert_legacy(json!({
            "name": 7,
            "dimensions": { "width": "40", "height": null },
            "locations": [{
                "id": 1,
                "status": "active",
                "code": 101,
                "materialId": "1001",
                "x": "2.5",
                "capacity": "600",
                "contents": 2.6
            }, {
                "id": 2,
                "status": "3",
                "width": true
            }]
        }))
        .unwrap();

        assert_eq!(scene.name, "7");
        assert_eq!(scene.dimensions, Dimensions::new(40.0, 50.0, 10.0));
        assert_eq!(scene.items.len(), 2);

        let first = &scene.items[0];
        assert_eq!(first.item_type(), ItemType::Container);
        assert_relative_eq!(first.position().x, 2.5);
        assert_relative_eq!(first.weight(), 600.0);
        assert_eq!(first.count(), 3);
        match first.metadata() {
            Some(ItemMetadata::Location(m)) => {
                assert_eq!(m.code.as_deref(), Some("101"));
                assert_eq!(m.status, None);
                assert_eq!(m.material_id, Some(1001));
            }
            other => panic!("unexpected metadata: {other:?}"),
        }

        let second = &scene.items[1];
        assert_relative_eq!(second.dimensions().width, 1.0);
        match second.metadata() {
            Some(ItemMetadata::Location(m)) => assert_eq!(m.status, Some(3)),
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn test_string_id_is_kept() {
        let scene = convert_legacy(json!({ "locations": [{ "id": "LOC-9" }] })).unwrap();
        assert_eq!(scene.items[0].id(), "LOC-9");
    }

    #[test]
    fn test_no_locations() {
        let scene = convert_legacy(json!({ "name": "Empty" })).unwrap();
        assert!(scene.items.is_empty());
    }

    #[test]
    fn test_non_object_is_invalid() {
        let err = convert_legacy(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
    }
}
