//! Pack placement across a whole floor plan.

use rand::Rng;
use stockgrid_core::{Dimensions, Error, LayoutConfig, LayoutResult, PackRepository, Subject};

use crate::floor_plan::FloorPlan;
use crate::sequential::SequentialPacker;

/// Places every pack of a repository into its location's bin.
#[derive(Debug, Clone, Default)]
pub struct PackPlanner {
    packer: SequentialPacker,
}

impl PackPlanner {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            packer: SequentialPacker::new(config),
        }
    }

    /// Walks the floor plan in ascending id order and packs each location.
    ///
    /// A location whose packing fails outright (bin too small, duplicates
    /// under [`DuplicatePolicy::Reject`](stockgrid_core::DuplicatePolicy::Reject))
    /// is rejected as a whole. Packs referencing locations missing from the
    /// floor plan are rejected with [`Error::UnknownLocation`], packs without
    /// a location with [`Error::MissingLocation`]. None of these stops the
    /// remaining locations.
    pub fn place<R: Rng + ?Sized>(
        &self,
        repository: &PackRepository,
        floor_plan: &FloorPlan,
        item: &Dimensions,
        rng: &mut R,
    ) -> LayoutResult {
        let mut result = LayoutResult::new();

        for (location_id, layout) in floor_plan.iter() {
            let packs = repository.by_location(location_id);
            if packs.is_empty() {
                continue;
            }

            match self.packer.pack(&layout.bin(), item, packs, rng) {
                Ok(placed) => {
                    log::debug!(
                        "location {}: placed {} packs, rejected {}",
                        location_id,
                        placed.placed_count(),
                        placed.rejected_count()
                    );
                    result.merge(placed);
                }
                Err(e) => result.reject(Subject::Location(location_id), e),
            }
        }

        for location_id in repository.location_ids() {
            if floor_plan.lookup(location_id).is_some() {
                continue;
            }
            log::warn!("no layout for location {}; skipping its packs", location_id);
            for pack in repository.by_location(location_id) {
                result.reject(Subject::Pack(pack.id), Error::UnknownLocation(location_id));
            }
        }

        let unassigned = repository.unassigned();
        if !unassigned.is_empty() {
            log::warn!("{} packs have no location; skipping them", unassigned.len());
        }
        for pack in unassigned {
            result.reject(Subject::Pack(pack.id), Error::MissingLocation(pack.id));
        }

        result
    }
}

/// Places `repository`'s packs with a planner built from `config`.
pub fn place_packs<R: Rng + ?Sized>(
    repository: &PackRepository,
    floor_plan: &FloorPlan,
    item: &Dimensions,
    config: &LayoutConfig,
    rng: &mut R,
) -> LayoutResult {
    PackPlanner::new(config.clone()).place(repository, floor_plan, item, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor_plan::BinLayout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stockgrid_core::{BoundsMode, PackRecord, Position};

    const PACK: Dimensions = Dimensions::new(0.14, 0.11, 0.15);

    fn plan() -> FloorPlan {
        FloorPlan::from_entries([
            (201, BinLayout::new(Position::new(6.6, 0.0, 0.5), 1.2, 1.0)),
            (202, BinLayout::new(Position::new(7.8, 0.0, 0.5), 1.2, 1.0)),
        ])
    }

    #[test]
    fn test_places_known_locations() {
        let repo: PackRepository = (1..=3)
            .map(|n| PackRecord::new(20100 + n, n as u32).in_location(201))
            .chain((1..=2).map(|n| PackRecord::new(20200 + n, n as u32).in_location(202)))
            .collect();

        let result = place_packs(
            &repo,
            &plan(),
            &PACK,
            &LayoutConfig::default(),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(result.all_placed());
        assert_eq!(result.placed_count(), 5);
        // location 201 first
        assert_eq!(
            result.items[0].metadata().and_then(|m| m.location_id()),
            Some(201)
        );
    }

    #[test]
    fn test_unknown_location_is_rejected() {
        let repo = PackRepository::new(vec![
            PackRecord::new(1, 1).in_location(201),
            PackRecord::new(2, 1).in_location(999),
        ]);
        let result = PackPlanner::default().place(&repo, &plan(), &PACK, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].subject, Subject::Pack(2));
        assert_eq!(result.rejected[0].reason, Error::UnknownLocation(999));
    }

    #[test]
    fn test_pack_without_location_is_rejected() {
        let repo = PackRepository::new(vec![
            PackRecord::new(1, 1).in_location(201),
            PackRecord::new(2, 2),
        ]);
        let result = place_packs(
            &repo,
            &plan(),
            &PACK,
            &LayoutConfig::default(),
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(result.placed_count() + result.rejected_count(), repo.len());
        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.rejected[0].subject, Subject::Pack(2));
        assert_eq!(result.rejected[0].reason, Error::MissingLocation(2));
    }

    #[test]
    fn test_clamp_uses_location_height() {
        let plan = FloorPlan::from_entries([(
            201,
            BinLayout::new(Position::new(6.6, 0.0, 0.5), 1.2, 1.0).with_height(0.2),
        )]);
        let repo: PackRepository = [1, 49, 50]
            .into_iter()
            .map(|n| PackRecord::new(20100 + i64::from(n), n).in_location(201))
            .collect();
        let config = LayoutConfig::new().with_bounds_mode(BoundsMode::ClampToBin);

        let result = place_packs(&repo, &plan, &PACK, &config, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.rejected[0].subject, Subject::Pack(20150));
        assert!(matches!(result.rejected[0].reason, Error::OutsideBin(_)));
    }

    #[test]
    fn test_failed_location_does_not_stop_others() {
        let plan = FloorPlan::from_entries([
            (1, BinLayout::new(Position::origin(), 0.1, 0.1)),
            (2, BinLayout::new(Position::new(2.0, 0.0, 0.0), 1.2, 1.0)),
        ]);
        let repo = PackRepository::new(vec![
            PackRecord::new(10, 1).in_location(1),
            PackRecord::new(20, 1).in_location(2),
        ]);
        let result = PackPlanner::default().place(&repo, &plan, &PACK, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.rejected[0].subject, Subject::Location(1));
        assert!(matches!(result.rejected[0].reason, Error::BinTooSmall { .. }));
    }
}
