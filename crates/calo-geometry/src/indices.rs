//! Tower, region, and crate coordinate types.
//!
//! Indices are plain value pairs used as routing keys; they carry no payload
//! and are never mutated after construction. Validity (range checks) is the
//! geometry's concern, see [`crate::CaloGeometry`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate of a single calorimeter tower.
///
/// `eta` is signed and skips zero (the detector has no eta = 0 slice);
/// `phi` wraps around the full azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerIndex {
    /// Signed eta index, `-32..=32` excluding 0.
    pub eta: i32,
    /// Phi index, `0..=71`.
    pub phi: u32,
}

impl TowerIndex {
    pub const fn new(eta: i32, phi: u32) -> Self {
        Self { eta, phi }
    }
}

impl fmt::Display for TowerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tower(eta={}, phi={})", self.eta, self.phi)
    }
}

/// Coordinate of a trigger region (a fixed 4x4 block of towers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionIndex {
    /// Signed region eta index, `-8..=8` excluding 0.
    pub eta: i32,
    /// Region phi index, `0..=17`.
    pub phi: u32,
}

impl RegionIndex {
    pub const fn new(eta: i32, phi: u32) -> Self {
        Self { eta, phi }
    }
}

impl fmt::Display for RegionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region(eta={}, phi={})", self.eta, self.phi)
    }
}

/// Index of a readout crate. Each crate covers a 120-degree phi sector
/// across the full eta range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrateIndex(pub u32);

impl fmt::Display for CrateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crate({})", self.0)
    }
}
