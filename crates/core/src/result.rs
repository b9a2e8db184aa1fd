//! Layout result representation.

use crate::item::ItemRecord;
use crate::Error;

/// The record a rejection refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A pack, by id.
    Pack(i64),
    /// A location, by id.
    Location(i64),
    /// A generated item, by item id.
    Item(String),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Pack(id) => write!(f, "pack {}", id),
            Subject::Location(id) => write!(f, "location {}", id),
            Subject::Item(id) => write!(f, "item {}", id),
        }
    }
}

/// A record that was left out of the layout, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub subject: Subject,
    pub reason: Error,
}

impl Rejection {
    pub fn new(subject: Subject, reason: Error) -> Self {
        Self { subject, reason }
    }
}

/// Result of a layout pass: the placed items plus everything rejected.
///
/// A bad record never aborts the rest of the scene; it ends up in `rejected`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Placed items, in placement order.
    pub items: Vec<ItemRecord>,

    /// Records that could not be placed.
    pub rejected: Vec<Rejection>,
}

impl LayoutResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing was rejected.
    pub fn all_placed(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of rejected records.
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Records a rejection and logs it.
    pub fn reject(&mut self, subject: Subject, reason: Error) {
        log::warn!("skipping {}: {}", subject, reason);
        self.rejected.push(Rejection::new(subject, reason));
    }

    /// Appends another result.
    pub fn merge(&mut self, other: LayoutResult) {
        self.items.extend(other.items);
        self.rejected.extend(other.rejected);
    }

    /// Consumes the result, returning only the placed items.
    pub fn into_items(self) -> Vec<ItemRecord> {
        self.items
    }
}
