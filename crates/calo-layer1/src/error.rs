//! Error types for the Layer-1 aggregation subsystem.
//!
//! Routing misses on read accessors are `None`, not errors; the variants
//! here cover set-path misses, bad firmware numbers, and internal tree
//! violations that indicate a geometry/configuration bug.

use calo_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur in the Layer-1 subsystem.
#[derive(Debug, Clone, Error)]
pub enum Layer1Error {
    /// A set call named a tower outside the detector layout.
    #[error("Unknown tower: eta={eta}, phi={phi}")]
    UnknownTower { eta: i32, phi: u32 },

    /// Construction was asked for an undocumented firmware version.
    #[error("Unknown firmware version: {version} (known versions are 0-3)")]
    UnknownFirmware { version: u32 },

    /// The arena violates the fixed tree shape. Should not occur in correct
    /// usage; indicates a geometry or construction bug.
    #[error("Malformed tree: {detail}")]
    MalformedTree { detail: String },
}

impl From<GeometryError> for Layer1Error {
    fn from(err: GeometryError) -> Self {
        Layer1Error::MalformedTree {
            detail: err.to_string(),
        }
    }
}
