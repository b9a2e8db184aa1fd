//! Error types for stockgrid.

use thiserror::Error;

/// Result type alias for stockgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out warehouse stock.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A box has a non-positive width, length or height.
    #[error("Invalid dimensions for '{subject}': {width} x {length} x {height}")]
    InvalidDimensions {
        /// What the dimensions belong to (item id, location id, ...).
        subject: String,
        width: f64,
        length: f64,
        height: f64,
    },

    /// The bin cannot hold even a single item.
    #[error("Bin {bin_width} x {bin_length} cannot hold item {item_width} x {item_length} with spacing {spacing}")]
    BinTooSmall {
        bin_width: f64,
        bin_length: f64,
        item_width: f64,
        item_length: f64,
        spacing: f64,
    },

    /// Two packs of one location share a sequence number.
    #[error("Duplicate sequence number {number} in location {location_id}")]
    DuplicateSequence {
        /// Location whose packs collide.
        location_id: i64,
        /// The repeated sequence number.
        number: u32,
    },

    /// Sequence numbers are 1-based; zero cannot be placed.
    #[error("Pack {pack_id} has invalid sequence number 0")]
    InvalidSequence {
        /// Offending pack.
        pack_id: i64,
    },

    /// A laid-out item leaves its bin (only checked on request).
    #[error("Item '{0}' does not fit inside its bin")]
    OutsideBin(String),

    /// A pack is not assigned to any location.
    #[error("Pack {0} has no location")]
    MissingLocation(i64),

    /// A pack references a location with no known layout.
    #[error("Unknown location: {0}")]
    UnknownLocation(i64),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
