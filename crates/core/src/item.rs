//! Renderable item records.

use crate::geometry::{Dimensions, Position};
use crate::metadata::ItemMetadata;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item type tag, selecting the visual representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemType {
    Pallet,
    Pack,
    Product,
    /// Wireframe-only item standing for a location itself.
    Container,
}

impl ItemType {
    /// All item types, in display order.
    pub const ALL: [ItemType; 4] = [
        ItemType::Pallet,
        ItemType::Pack,
        ItemType::Product,
        ItemType::Container,
    ];

    /// Colour a renderer uses when the item carries none.
    pub fn default_color(&self) -> &'static str {
        match self {
            ItemType::Pallet => "#8B4513",
            ItemType::Pack => "#4A90E2",
            ItemType::Product => "#50C878",
            ItemType::Container => "#FFB347",
        }
    }

    /// Returns true for physical stock (solid boxes), false for wireframes.
    pub fn is_physical(&self) -> bool {
        !matches!(self, ItemType::Container)
    }

    /// Lower-case name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Pallet => "pallet",
            ItemType::Pack => "pack",
            ItemType::Product => "product",
            ItemType::Container => "container",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidConfig(format!("unknown item type '{}'", s)))
    }
}

/// One renderable unit: a pallet, pack, product or location wireframe.
///
/// `position` holds the footprint center on x/z and the base on y, which is
/// what the rendering layer expects. Records are built once and not mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemRecord {
    id: String,
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    item_type: ItemType,
    position: Position,
    dimensions: Dimensions,
    count: u32,
    weight: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    color: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    model_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    metadata: Option<ItemMetadata>,
}

impl ItemRecord {
    /// Creates a new item with zero count and weight.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        item_type: ItemType,
        position: Position,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            position,
            dimensions,
            count: 0,
            weight: 0.0,
            color: None,
            model_url: None,
            metadata: None,
        }
    }

    /// Sets the unit count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the count from a fractional quantity, rounded to the nearest
    /// unit. Negative or non-finite quantities count as zero.
    pub fn with_quantity(self, quantity: f64) -> Self {
        let count = if quantity.is_finite() && quantity >= 0.0 {
            let rounded = quantity.round();
            if rounded != quantity {
                log::debug!("item {}: rounded quantity {} to {}", self.id, quantity, rounded);
            }
            rounded.min(f64::from(u32::MAX)) as u32
        } else {
            log::warn!("item {}: invalid quantity {}; using 0", self.id, quantity);
            0
        };
        self.with_count(count)
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the external model reference.
    pub fn with_model_url(mut self, url: impl Into<String>) -> Self {
        self.model_url = Some(url.into());
        self
    }

    /// Sets the metadata.
    pub fn with_metadata(mut self, metadata: impl Into<ItemMetadata>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the explicit colour, or the type's default.
    pub fn display_color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.item_type.default_color())
    }

    pub fn model_url(&self) -> Option<&str> {
        self.model_url.as_deref()
    }

    pub fn metadata(&self) -> Option<&ItemMetadata> {
        self.metadata.as_ref()
    }

    /// The far corner used by the scene bounding check: `position + dimensions`.
    pub fn extent(&self) -> Position {
        self.position.offset(
            self.dimensions.width,
            self.dimensions.height,
            self.dimensions.length,
        )
    }

    /// Hover label in the renderer's format.
    pub fn label(&self) -> String {
        format!(
            "{}\n{} | {} units\n{}kg",
            self.name, self.item_type, self.count, self.weight
        )
    }

    /// Checks positive dimensions and non-negative weight.
    pub fn validate(&self) -> Result<()> {
        self.dimensions.validate(&self.id)?;
        if self.weight < 0.0 || !self.weight.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "Weight for '{}' must be a non-negative number",
                self.id
            )));
        }
        Ok(())
    }
}
