//! Presentational fields sampled from an injected random source.
//!
//! `count` and `weight` on generated stock are display values only. They are
//! drawn here and nowhere near position computation, so layouts stay
//! reproducible whatever generator is passed in.

use rand::Rng;
use stockgrid_core::ItemType;

/// Display figures for one generated item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub count: u32,
    pub weight: f64,
}

impl Presentation {
    /// Draws a unit count in `10..30` and a weight in `50..150` for pallets,
    /// `10..40` otherwise.
    pub fn sample<R: Rng + ?Sized>(item_type: ItemType, rng: &mut R) -> Self {
        let count: u32 = rng.gen_range(10..30);
        let weight: u32 = match item_type {
            ItemType::Pallet => rng.gen_range(50..150),
            _ => rng.gen_range(10..40),
        };
        Self {
            count,
            weight: f64::from(weight),
        }
    }
}
