//! # Error Types
//!
//! Errors raised while validating routing paths at construction time.
//! Routing misses during normal lookups are `None`, not errors.

use thiserror::Error;

/// Errors that can occur while building or validating the geometry tree.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// A routing path referenced a crate outside the fixed layout.
    #[error("Crate out of range: {crate_index} >= {n_crates}")]
    CrateOutOfRange { crate_index: usize, n_crates: usize },

    /// A routing path referenced a region slot outside its crate.
    #[error("Region slot out of range: {region_slot} >= {regions_in_crate}")]
    RegionOutOfRange {
        region_slot: usize,
        regions_in_crate: usize,
    },

    /// A routing path referenced a tower slot outside its region.
    #[error("Tower slot out of range: {tower_slot} >= {towers_in_region}")]
    TowerOutOfRange {
        tower_slot: usize,
        towers_in_region: usize,
    },
}
