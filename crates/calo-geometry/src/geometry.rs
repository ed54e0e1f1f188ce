//! Fixed routing geometry for the Layer-1 tower/region/crate tree.
//!
//! The tree shape is a constant of the detector: 64 eta slices times 72 phi
//! slices of towers, grouped into 4x4 regions, grouped into three 120-degree
//! crates. [`CaloGeometry`] turns logical indices into flat arena routes and
//! back. All lookups are O(1) arithmetic; an index outside the layout is a
//! routing miss (`None`), which is a normal outcome at the detector edges.

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;
use crate::indices::{CrateIndex, RegionIndex, TowerIndex};

/// Flat arena coordinates of one tower: which crate, which region slot
/// within that crate, which tower slot within that region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerRoute {
    pub crate_index: usize,
    pub region_slot: usize,
    pub tower_slot: usize,
}

/// Flat arena coordinates of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRoute {
    pub crate_index: usize,
    pub region_slot: usize,
}

/// The fixed Layer-1 routing geometry.
///
/// Carries no per-event state; a single instance can serve any number of
/// `Layer1` arenas. Constructed as a unit value because every cardinality is
/// a detector constant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CaloGeometry;

impl CaloGeometry {
    /// Tower eta slices (32 per endcap half, no eta = 0 slice).
    pub const TOWERS_IN_ETA: usize = 64;
    /// Tower phi slices over the full azimuth.
    pub const TOWERS_IN_PHI: usize = 72;
    /// Tower eta slices per region.
    pub const ETA_IN_REGION: usize = 4;
    /// Tower phi slices per region.
    pub const PHI_IN_REGION: usize = 4;
    /// Region phi slices per crate.
    pub const REGION_PHI_IN_CRATE: usize = 6;
    /// Number of readout crates.
    pub const N_CRATES: usize = 3;
    /// First forward-calorimeter eta slice (inclusive, absolute value).
    pub const HF_ETA_BOUNDARY: i32 = 29;

    /// Region eta slices per endcap half.
    pub const REGIONS_IN_ETA_HALF: usize =
        Self::TOWERS_IN_ETA / 2 / Self::ETA_IN_REGION;
    /// Region eta slices total.
    pub const REGIONS_IN_ETA: usize = 2 * Self::REGIONS_IN_ETA_HALF;
    /// Region phi slices total.
    pub const REGIONS_IN_PHI: usize = Self::TOWERS_IN_PHI / Self::PHI_IN_REGION;
    /// Regions owned by one crate.
    pub const REGIONS_IN_CRATE: usize =
        Self::REGIONS_IN_ETA * Self::REGION_PHI_IN_CRATE;
    /// Towers owned by one region.
    pub const TOWERS_IN_REGION: usize = Self::ETA_IN_REGION * Self::PHI_IN_REGION;
    /// Towers in the whole detector.
    pub const N_TOWERS: usize = Self::TOWERS_IN_ETA * Self::TOWERS_IN_PHI;
    /// Regions in the whole detector.
    pub const N_REGIONS: usize = Self::REGIONS_IN_ETA * Self::REGIONS_IN_PHI;

    pub fn new() -> Self {
        Self
    }

    /// True if the tower index names a real tower.
    pub fn is_valid_tower(&self, t: TowerIndex) -> bool {
        t.eta != 0
            && t.eta.unsigned_abs() as usize <= Self::TOWERS_IN_ETA / 2
            && (t.phi as usize) < Self::TOWERS_IN_PHI
    }

    /// True if the region index names a real region.
    pub fn is_valid_region(&self, r: RegionIndex) -> bool {
        r.eta != 0
            && r.eta.unsigned_abs() as usize <= Self::REGIONS_IN_ETA_HALF
            && (r.phi as usize) < Self::REGIONS_IN_PHI
    }

    /// True if the tower sits in the forward calorimeter.
    pub fn is_forward(&self, t: TowerIndex) -> bool {
        t.eta.abs() >= Self::HF_ETA_BOUNDARY
    }

    /// Contiguous eta slot for a signed tower eta, `0..TOWERS_IN_ETA`.
    fn tower_eta_slot(eta: i32) -> usize {
        if eta < 0 {
            (eta + Self::TOWERS_IN_ETA as i32 / 2) as usize
        } else {
            (eta + Self::TOWERS_IN_ETA as i32 / 2 - 1) as usize
        }
    }

    /// Inverse of [`Self::tower_eta_slot`].
    fn tower_eta_from_slot(slot: usize) -> i32 {
        let half = Self::TOWERS_IN_ETA as i32 / 2;
        if (slot as i32) < half {
            slot as i32 - half
        } else {
            slot as i32 - half + 1
        }
    }

    fn region_eta_slot(eta: i32) -> usize {
        if eta < 0 {
            (eta + Self::REGIONS_IN_ETA_HALF as i32) as usize
        } else {
            (eta + Self::REGIONS_IN_ETA_HALF as i32 - 1) as usize
        }
    }

    fn region_eta_from_slot(slot: usize) -> i32 {
        let half = Self::REGIONS_IN_ETA_HALF as i32;
        if (slot as i32) < half {
            slot as i32 - half
        } else {
            slot as i32 - half + 1
        }
    }

    /// Region containing a tower, or `None` on a routing miss.
    pub fn region_of(&self, t: TowerIndex) -> Option<RegionIndex> {
        if !self.is_valid_tower(t) {
            return None;
        }
        let eta_slot = Self::tower_eta_slot(t.eta);
        let region_eta = Self::region_eta_from_slot(eta_slot / Self::ETA_IN_REGION);
        let region_phi = t.phi / Self::PHI_IN_REGION as u32;
        Some(RegionIndex::new(region_eta, region_phi))
    }

    /// Crate covering a region phi slice.
    pub fn crate_of_region_phi(&self, region_phi: u32) -> CrateIndex {
        CrateIndex(region_phi / Self::REGION_PHI_IN_CRATE as u32)
    }

    /// Resolve a tower index to its flat arena route.
    pub fn resolve_tower(&self, t: TowerIndex) -> Option<TowerRoute> {
        if !self.is_valid_tower(t) {
            return None;
        }
        let eta_slot = Self::tower_eta_slot(t.eta);
        let region_eta_slot = eta_slot / Self::ETA_IN_REGION;
        let region_phi = t.phi as usize / Self::PHI_IN_REGION;
        let crate_index = region_phi / Self::REGION_PHI_IN_CRATE;
        let region_phi_in_crate = region_phi % Self::REGION_PHI_IN_CRATE;
        let region_slot =
            region_phi_in_crate * Self::REGIONS_IN_ETA + region_eta_slot;
        let tower_slot = (t.phi as usize % Self::PHI_IN_REGION) * Self::ETA_IN_REGION
            + eta_slot % Self::ETA_IN_REGION;
        Some(TowerRoute {
            crate_index,
            region_slot,
            tower_slot,
        })
    }

    /// Resolve a region index to its flat arena route.
    pub fn resolve_region(&self, r: RegionIndex) -> Option<RegionRoute> {
        if !self.is_valid_region(r) {
            return None;
        }
        let region_phi = r.phi as usize;
        let crate_index = region_phi / Self::REGION_PHI_IN_CRATE;
        let region_slot = (region_phi % Self::REGION_PHI_IN_CRATE) * Self::REGIONS_IN_ETA
            + Self::region_eta_slot(r.eta);
        Some(RegionRoute {
            crate_index,
            region_slot,
        })
    }

    /// Logical region index for an arena route. Errs only on a malformed
    /// route, which indicates a construction bug upstream.
    pub fn region_index_of(&self, route: RegionRoute) -> Result<RegionIndex, GeometryError> {
        if route.crate_index >= Self::N_CRATES {
            return Err(GeometryError::CrateOutOfRange {
                crate_index: route.crate_index,
                n_crates: Self::N_CRATES,
            });
        }
        if route.region_slot >= Self::REGIONS_IN_CRATE {
            return Err(GeometryError::RegionOutOfRange {
                region_slot: route.region_slot,
                regions_in_crate: Self::REGIONS_IN_CRATE,
            });
        }
        let region_phi_in_crate = route.region_slot / Self::REGIONS_IN_ETA;
        let region_eta_slot = route.region_slot % Self::REGIONS_IN_ETA;
        let region_phi =
            route.crate_index * Self::REGION_PHI_IN_CRATE + region_phi_in_crate;
        Ok(RegionIndex::new(
            Self::region_eta_from_slot(region_eta_slot),
            region_phi as u32,
        ))
    }

    /// Logical tower index for an arena route.
    pub fn tower_index_of(&self, route: TowerRoute) -> Result<TowerIndex, GeometryError> {
        let region = self.region_index_of(RegionRoute {
            crate_index: route.crate_index,
            region_slot: route.region_slot,
        })?;
        if route.tower_slot >= Self::TOWERS_IN_REGION {
            return Err(GeometryError::TowerOutOfRange {
                tower_slot: route.tower_slot,
                towers_in_region: Self::TOWERS_IN_REGION,
            });
        }
        let phi_in_region = route.tower_slot / Self::ETA_IN_REGION;
        let eta_in_region = route.tower_slot % Self::ETA_IN_REGION;
        let eta_slot =
            Self::region_eta_slot(region.eta) * Self::ETA_IN_REGION + eta_in_region;
        let phi = region.phi as usize * Self::PHI_IN_REGION + phi_in_region;
        Ok(TowerIndex::new(
            Self::tower_eta_from_slot(eta_slot),
            phi as u32,
        ))
    }
}
