//! Crate records: region roll-up per 120-degree phi sector.

use calo_geometry::CrateIndex;
use serde::{Deserialize, Serialize};

use super::region::RegionRecord;
use super::CRATE_ET_MASK;
use crate::error::Layer1Error;

/// Aggregated ET of one readout crate, derived from its member regions
/// during the crate stage of `process()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateRecord {
    /// Logical coordinate, fixed at construction.
    pub index: CrateIndex,
    /// Crate ET (14 bits).
    pub et: u32,
    /// True when any member region is saturated.
    pub saturated: bool,
}

impl CrateRecord {
    pub fn new(index: CrateIndex) -> Self {
        Self {
            index,
            et: 0,
            saturated: false,
        }
    }

    /// Reset derived state between events.
    pub fn clear(&mut self) {
        self.et = 0;
        self.saturated = false;
    }

    /// Roll up the member regions into this record.
    pub fn aggregate(&mut self, regions: &[RegionRecord]) -> Result<(), Layer1Error> {
        if regions.is_empty() {
            return Err(Layer1Error::MalformedTree {
                detail: format!("{} has no regions", self.index),
            });
        }
        let mut sum: u32 = 0;
        let mut saturated = false;
        for region in regions {
            sum = sum.saturating_add(region.et);
            saturated |= region.saturated;
        }
        self.et = sum.min(CRATE_ET_MASK);
        self.saturated = saturated;
        Ok(())
    }
}
