//! Grid packing: identical items in a centered rows x columns grid.
//!
//! The grid is centered on the bin's floor center. Each further layer sits one
//! item height above the previous one. Positions are a pure function of the
//! bin, the request and the configured spacing/lift; nothing random reaches them.

use rand::Rng;
use stockgrid_core::{
    BoundsMode, Dimensions, ItemRecord, ItemType, LayoutConfig, LayoutResult, Position,
    StockMetadata, Subject,
};

use crate::bin::Bin;
use crate::presentation::Presentation;

const FIT_TOLERANCE: f64 = 1e-9;

/// What to lay out: one item size repeated over a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRequest {
    /// Prefix of every generated item id.
    base_id: String,

    /// Prefix of every generated item name.
    base_name: String,

    item_type: ItemType,

    /// Size of one item.
    item: Dimensions,

    columns: u32,
    rows: u32,

    /// Number of full layers, used when no quantity is given.
    layers: u32,

    /// Total number of items; spills into extra layers when above one layer.
    quantity: Option<u32>,

    color: Option<String>,

    location_id: Option<i64>,
    material_id: Option<i64>,
}

impl GridRequest {
    /// Creates a single-layer 1x1 grid of `item`.
    pub fn new(base_id: impl Into<String>, item_type: ItemType, item: Dimensions) -> Self {
        let base_id = base_id.into();
        Self {
            base_name: base_id.clone(),
            base_id,
            item_type,
            item,
            columns: 1,
            rows: 1,
            layers: 1,
            quantity: None,
            color: None,
            location_id: None,
            material_id: None,
        }
    }

    /// Sets the column and row counts.
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Sets the number of full layers.
    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the total item count, overriding the layer count.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the display name prefix.
    pub fn with_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Sets the item colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Links the generated stock to a location and material.
    pub fn with_stock(mut self, location_id: i64, material_id: Option<i64>) -> Self {
        self.location_id = Some(location_id);
        self.material_id = material_id;
        self
    }

    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    pub fn item(&self) -> &Dimensions {
        &self.item
    }

    /// Cells in one layer.
    pub fn per_layer(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Total number of cells to generate.
    pub fn total(&self) -> u32 {
        self.quantity
            .unwrap_or_else(|| self.per_layer().saturating_mul(self.layers))
    }

    /// Number of layers the cells occupy.
    pub fn layer_count(&self) -> u32 {
        let per_layer = self.per_layer();
        if per_layer == 0 {
            return 0;
        }
        self.total().div_ceil(per_layer)
    }
}

/// One computed grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub id: String,
    /// 1-based index within the layer.
    pub index: u32,
    pub row: u32,
    pub column: u32,
    pub layer: u32,
    /// Footprint center on x/z, base on y.
    pub position: Position,
}

/// Grid layout solver.
#[derive(Debug, Clone, Default)]
pub struct GridPacker {
    config: LayoutConfig,
}

impl GridPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes every cell position. A zero row or column count yields nothing.
    pub fn cells(&self, bin: &Bin, request: &GridRequest) -> Vec<GridCell> {
        let columns = request.columns;
        let rows = request.rows;
        let per_layer = request.per_layer();
        if per_layer == 0 {
            return Vec::new();
        }

        let s = self.config.spacing;
        let w = request.item.width;
        let l = request.item.length;

        let total_width = f64::from(columns) * w + f64::from(columns - 1) * s;
        let total_length = f64::from(rows) * l + f64::from(rows - 1) * s;
        let origin = bin.origin();
        let start_x = origin.x - total_width / 2.0 + w / 2.0;
        let start_z = origin.z - total_length / 2.0 + l / 2.0;

        let total = request.total();
        let layered = request.layer_count() > 1;
        let mut cells = Vec::with_capacity(total as usize);

        for n in 0..total {
            let layer = n / per_layer;
            let in_layer = n % per_layer;
            let row = in_layer / columns;
            let column = in_layer % columns;
            let index = in_layer + 1;

            let id = if layered {
                format!("{}-L{}-{}", request.base_id, layer + 1, index)
            } else {
                format!("{}-{}", request.base_id, index)
            };

            let position = Position::new(
                start_x + f64::from(column) * (w + s),
                origin.y + self.config.floor_lift + f64::from(layer) * request.item.height,
                start_z + f64::from(row) * (l + s),
            );

            cells.push(GridCell {
                id,
                index,
                row,
                column,
                layer,
                position,
            });
        }

        cells
    }

    /// Lays out the grid and builds renderable items.
    ///
    /// `rng` only feeds the presentational count and weight. With
    /// [`BoundsMode::ClampToBin`] cells leaving the bin are rejected.
    pub fn pack<R: Rng + ?Sized>(&self, bin: &Bin, request: &GridRequest, rng: &mut R) -> LayoutResult {
        let mut result = LayoutResult::new();

        if let Err(e) = request.item.validate(&request.base_id) {
            result.reject(Subject::Item(request.base_id.clone()), e);
            return result;
        }

        for cell in self.cells(bin, request) {
            if self.config.bounds_mode == BoundsMode::ClampToBin
                && !bin.holds(&cell.position, &request.item, FIT_TOLERANCE)
            {
                result.reject(
                    Subject::Item(cell.id.clone()),
                    stockgrid_core::Error::OutsideBin(cell.id),
                );
                continue;
            }

            let shown = Presentation::sample(request.item_type, rng);
            let mut item = ItemRecord::new(
                cell.id,
                format!("{} {}", request.base_name, cell.index),
                request.item_type,
                cell.position,
                request.item,
            )
            .with_count(shown.count)
            .with_weight(shown.weight);

            if let Some(color) = &request.color {
                item = item.with_color(color.clone());
            }
            if let Some(location_id) = request.location_id {
                item = item.with_metadata(StockMetadata {
                    location_id,
                    material_id: request.material_id,
                });
            }
            result.items.push(item);
        }

        log::debug!(
            "grid {}: placed {} of {} cells",
            request.base_id,
            result.placed_count(),
            request.total()
        );
        result
    }
}
