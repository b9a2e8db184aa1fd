//! Sequential packing: numbered packs filling a bin row by row, then level by
//! level.
//!
//! A pack's slot depends only on its sequence number and the bin/item
//! geometry. Input order and the presence of other packs never move it.

use rand::Rng;
use stockgrid_core::{
    BoundsMode, Dimensions, DuplicatePolicy, Error, ItemRecord, ItemType, LayoutConfig,
    LayoutResult, PackRecord, Position, Result, Subject,
};

use crate::bin::Bin;
use crate::presentation::Presentation;

/// Colour of packs placed by this packer.
pub const PACK_COLOR: &str = "#4A90E2";

const FIT_TOLERANCE: f64 = 1e-9;

/// How many items one level of a bin takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCapacity {
    /// Items along x.
    pub per_row: u32,
    /// Items along z.
    pub per_column: u32,
}

impl LevelCapacity {
    /// Items per level, `None` when the count does not fit a `u32`.
    pub fn checked_per_level(&self) -> Option<u32> {
        self.per_row.checked_mul(self.per_column)
    }

    pub fn per_level(&self) -> u32 {
        self.per_row.saturating_mul(self.per_column)
    }

    /// Slot of the 1-based sequence number `number`.
    ///
    /// Returns `None` for 0 and for an empty capacity.
    pub fn slot(&self, number: u32) -> Option<Slot> {
        let index = number.checked_sub(1)?;
        let per_level = self.per_level();
        if per_level == 0 {
            return None;
        }
        let level = index / per_level;
        let in_level = index % per_level;
        Some(Slot {
            level,
            row: in_level / self.per_row,
            column: in_level % self.per_row,
        })
    }
}

/// Grid coordinates of one pack inside its bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub level: u32,
    pub row: u32,
    pub column: u32,
}

/// Sequential layout solver.
#[derive(Debug, Clone, Default)]
pub struct SequentialPacker {
    config: LayoutConfig,
}

impl SequentialPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the per-level capacity of `bin` for `item`.
    ///
    /// Fails with [`Error::BinTooSmall`] when not even one item fits along x
    /// or z, and with [`Error::InvalidConfig`] when a level holds more items
    /// than sequence numbers can address.
    pub fn capacity(&self, bin: &Bin, item: &Dimensions) -> Result<LevelCapacity> {
        item.validate("pack")?;
        bin.validate()?;

        let s = self.config.spacing;
        let per_row = (bin.width() / (item.width + s)).floor();
        let per_column = (bin.length() / (item.length + s)).floor();

        if per_row < 1.0 || per_column < 1.0 {
            return Err(Error::BinTooSmall {
                bin_width: bin.width(),
                bin_length: bin.length(),
                item_width: item.width,
                item_length: item.length,
                spacing: s,
            });
        }

        let too_many = || {
            Error::InvalidConfig(format!(
                "bin {} x {} holds {} x {} items per level, more than sequence numbers address",
                bin.width(),
                bin.length(),
                per_row,
                per_column
            ))
        };
        let max = f64::from(u32::MAX);
        if per_row > max || per_column > max {
            return Err(too_many());
        }

        let capacity = LevelCapacity {
            per_row: per_row as u32,
            per_column: per_column as u32,
        };
        capacity.checked_per_level().ok_or_else(too_many)?;
        Ok(capacity)
    }

    /// Position of a slot: footprint center on x/z, base on y.
    pub fn position(&self, bin: &Bin, item: &Dimensions, slot: Slot) -> Position {
        let s = self.config.spacing;
        Position::new(
            bin.left_edge() + item.width / 2.0 + f64::from(slot.column) * (item.width + s),
            bin.origin().y + f64::from(slot.level) * item.height,
            bin.front_edge() + item.length / 2.0 + f64::from(slot.row) * (item.length + s),
        )
    }

    /// Places `packs` into `bin`.
    ///
    /// Packs are sorted by `(number, id)` first. Zero sequence numbers are
    /// rejected. Repeated numbers follow the configured [`DuplicatePolicy`]:
    /// `Skip` keeps the lowest pack id and rejects the rest, `Reject` fails
    /// the whole call.
    ///
    /// `rng` only feeds the presentational count and weight.
    pub fn pack<'a, I, R>(
        &self,
        bin: &Bin,
        item: &Dimensions,
        packs: I,
        rng: &mut R,
    ) -> Result<LayoutResult>
    where
        I: IntoIterator<Item = &'a PackRecord>,
        R: Rng + ?Sized,
    {
        let capacity = self.capacity(bin, item)?;

        let mut sorted: Vec<&PackRecord> = packs.into_iter().collect();
        sorted.sort_by_key(|p| (p.number, p.id));

        let mut result = LayoutResult::new();
        let mut last_number = None;

        for pack in sorted {
            let Some(slot) = capacity.slot(pack.number) else {
                result.reject(
                    Subject::Pack(pack.id),
                    Error::InvalidSequence { pack_id: pack.id },
                );
                continue;
            };

            if last_number == Some(pack.number) {
                let duplicate = Error::DuplicateSequence {
                    location_id: pack.location_id.unwrap_or_default(),
                    number: pack.number,
                };
                match self.config.duplicate_policy {
                    DuplicatePolicy::Skip => {
                        result.reject(Subject::Pack(pack.id), duplicate);
                        continue;
                    }
                    DuplicatePolicy::Reject => return Err(duplicate),
                }
            }
            last_number = Some(pack.number);

            let position = self.position(bin, item, slot);
            if self.config.bounds_mode == BoundsMode::ClampToBin
                && !bin.holds(&position, item, FIT_TOLERANCE)
            {
                result.reject(Subject::Pack(pack.id), Error::OutsideBin(pack.item_id()));
                continue;
            }

            let shown = Presentation::sample(ItemType::Pack, rng);
            let name = pack
                .code
                .clone()
                .unwrap_or_else(|| format!("Pack {}", pack.number));

            result.items.push(
                ItemRecord::new(pack.item_id(), name, ItemType::Pack, position, *item)
                    .with_count(shown.count)
                    .with_weight(shown.weight)
                    .with_color(PACK_COLOR)
                    .with_metadata(pack.metadata()),
            );
        }

        Ok(result)
    }
}
