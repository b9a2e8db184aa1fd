//! Read-only pack repository.
//!
//! Built once from a data source and then shared by reference; nothing here
//! mutates after construction, so concurrent readers need no locking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::pack::PackRecord;

/// An in-memory collection of packs indexed by id and by location.
#[derive(Debug, Clone, Default)]
pub struct PackRepository {
    packs: Vec<PackRecord>,
    by_id: HashMap<i64, usize>,
    by_location: HashMap<i64, Vec<usize>>,
    unassigned: Vec<usize>,
}

impl PackRepository {
    /// Builds the repository from pack records.
    ///
    /// When two records share an id the first one is kept for `by_id`.
    pub fn new(packs: Vec<PackRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(packs.len());
        let mut by_location: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut unassigned = Vec::new();

        for (idx, pack) in packs.iter().enumerate() {
            match by_id.entry(pack.id) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(_) => {
                    log::warn!("duplicate pack id {}; keeping the first record", pack.id);
                }
            }
            match pack.location_id {
                Some(location_id) => by_location.entry(location_id).or_default().push(idx),
                None => unassigned.push(idx),
            }
        }

        log::debug!(
            "pack repository loaded: {} packs across {} locations, {} unassigned",
            packs.len(),
            by_location.len(),
            unassigned.len()
        );

        Self {
            packs,
            by_id,
            by_location,
            unassigned,
        }
    }

    /// Returns every pack stored in `location_id`, in no particular order.
    ///
    /// Unknown locations yield an empty list.
    pub fn by_location(&self, location_id: i64) -> Vec<&PackRecord> {
        self.by_location
            .get(&location_id)
            .map(|indices| indices.iter().map(|&i| &self.packs[i]).collect())
            .unwrap_or_default()
    }

    /// Packs without a location, in load order.
    pub fn unassigned(&self) -> Vec<&PackRecord> {
        self.unassigned.iter().map(|&i| &self.packs[i]).collect()
    }

    /// Looks a pack up by id.
    pub fn by_id(&self, id: i64) -> Option<&PackRecord> {
        self.by_id.get(&id).map(|&i| &self.packs[i])
    }

    /// Location ids that hold at least one pack, ascending.
    pub fn location_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.by_location.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All packs, in load order.
    pub fn iter(&self) -> impl Iterator<Item = &PackRecord> {
        self.packs.iter()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl FromIterator<PackRecord> for PackRepository {
    fn from_iter<I: IntoIterator<Item = PackRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> PackRepository {
        vec![
            PackRecord::new(1, 1).in_location(201),
            PackRecord::new(2, 2).in_location(201),
            PackRecord::new(3, 1).in_location(202),
            PackRecord::new(4, 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_by_location() {
        let repo = repo();
        let mut ids: Vec<i64> = repo.by_location(201).iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert!(repo.by_location(999).is_empty());
        assert_eq!(repo.location_ids(), vec![201, 202]);
    }

    #[test]
    fn test_unassigned_packs_are_kept() {
        let repo = repo();
        let unassigned: Vec<i64> = repo.unassigned().iter().map(|p| p.id).collect();
        assert_eq!(unassigned, vec![4]);
        assert_eq!(repo.by_id(4).map(|p| p.number), Some(1));
    }

    #[test]
    fn test_by_id() {
        let repo = repo();
        assert_eq!(repo.by_id(3).and_then(|p| p.location_id), Some(202));
        assert!(repo.by_id(42).is_none());
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let repo = PackRepository::new(vec![
            PackRecord::new(9, 1).with_code("first"),
            PackRecord::new(9, 2).with_code("second"),
        ]);
        assert_eq!(repo.by_id(9).and_then(|p| p.code.as_deref()), Some("first"));
    }
}
