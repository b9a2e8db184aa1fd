//! Pack records: trackable stored units with a fill order.

use chrono::NaiveDate;

use crate::metadata::PackMetadata;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trackable stored unit.
///
/// `number` is the pack's 1-based sequence number within its location and is
/// the only input to its computed position under sequential packing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackRecord {
    pub id: i64,
    pub number: u32,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub code: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub inventory_id: Option<i64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "inventoryLocationId", default, skip_serializing_if = "Option::is_none")
    )]
    pub location_id: Option<i64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SSCC", default, skip_serializing_if = "Option::is_none")
    )]
    pub sscc: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "expire1",
            default,
            deserialize_with = "crate::date::deserialize_opt"
        )
    )]
    pub expires: Option<NaiveDate>,
}

impl PackRecord {
    /// Creates a pack with the given id and sequence number.
    pub fn new(id: i64, number: u32) -> Self {
        Self {
            id,
            number,
            code: None,
            inventory_id: None,
            location_id: None,
            sscc: None,
            expires: None,
        }
    }

    /// Sets the owning location.
    pub fn in_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Sets the owning inventory.
    pub fn in_inventory(mut self, inventory_id: i64) -> Self {
        self.inventory_id = Some(inventory_id);
        self
    }

    /// Sets the label code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the serialized shipping container code.
    pub fn with_sscc(mut self, sscc: impl Into<String>) -> Self {
        self.sscc = Some(sscc.into());
        self
    }

    /// Sets the expiry date.
    pub fn with_expiry(mut self, date: NaiveDate) -> Self {
        self.expires = Some(date);
        self
    }

    /// Item id of the rendered pack: its code, or `PACK-{id}`.
    pub fn item_id(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| format!("PACK-{}", self.id))
    }

    /// Metadata carried by the rendered pack.
    pub fn metadata(&self) -> PackMetadata {
        PackMetadata {
            pack_id: self.id,
            pack_number: self.number,
            pack_code: self.code.clone(),
            location_id: self.location_id,
            inventory_id: self.inventory_id,
            sscc: self.sscc.clone(),
            expire_date: self.expires,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_fallback() {
        assert_eq!(PackRecord::new(7, 1).item_id(), "PACK-7");
        assert_eq!(
            PackRecord::new(7, 1).with_code("PACK-201-001").item_id(),
            "PACK-201-001"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_names() {
        let json = r#"{
            "id": 20101, "number": 1, "code": "PACK-201-001",
            "inventoryId": 2, "inventoryLocationId": 201,
            "SSCC": "000000000000020101", "expire1": "2025-12-31"
        }"#;
        let pack: PackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pack.location_id, Some(201));
        assert_eq!(pack.expires, NaiveDate::from_ymd_opt(2025, 12, 31));

        let no_expiry: PackRecord =
            serde_json::from_str(r#"{"id": 1, "number": 2, "expire1": null}"#).unwrap();
        assert_eq!(no_expiry.expires, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_expiry_accepts_timestamp() {
        let json = r#"{"id": 20101, "number": 1, "expire1": "2025-12-31T00:00:00.000Z"}"#;
        let pack: PackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(pack.expires, NaiveDate::from_ymd_opt(2025, 12, 31));

        let missing: PackRecord = serde_json::from_str(r#"{"id": 1, "number": 1}"#).unwrap();
        assert_eq!(missing.expires, None);

        let bad = serde_json::from_str::<PackRecord>(r#"{"id": 1, "number": 1, "expire1": "soon"}"#);
        assert!(bad.is_err());
    }
}
