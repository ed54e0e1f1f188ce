//! Region records: 4x4 tower roll-up.

use calo_geometry::RegionIndex;
use serde::{Deserialize, Serialize};

use super::tower::TowerRecord;
use super::REGION_ET_MASK;
use crate::error::Layer1Error;

/// Aggregated ET and feature summary of one region, derived from its member
/// towers during the region stage of `process()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Logical coordinate, fixed at construction.
    pub index: RegionIndex,
    /// Region ET (10 bits). Forced to the mask when saturated.
    pub et: u32,
    /// OR of member ECAL fine-grain flags.
    pub fine_grain: bool,
    /// OR of member HCAL feature bits.
    pub feature_bits: u32,
    /// True when any member tower carries the saturation code.
    pub saturated: bool,
}

impl RegionRecord {
    pub fn new(index: RegionIndex) -> Self {
        Self {
            index,
            et: 0,
            fine_grain: false,
            feature_bits: 0,
            saturated: false,
        }
    }

    /// Reset derived state between events.
    pub fn clear(&mut self) {
        self.et = 0;
        self.fine_grain = false;
        self.feature_bits = 0;
        self.saturated = false;
    }

    /// Roll up the encoded member towers into this record.
    ///
    /// The sum is order-independent; clamping happens once on the total, so
    /// any iteration order over the members yields the same region ET.
    pub fn aggregate(&mut self, towers: &[TowerRecord]) -> Result<(), Layer1Error> {
        if towers.is_empty() {
            return Err(Layer1Error::MalformedTree {
                detail: format!("{} has no towers", self.index),
            });
        }
        let mut sum: u32 = 0;
        let mut fine_grain = false;
        let mut feature_bits = 0;
        let mut saturated = false;
        for tower in towers {
            sum = sum.saturating_add(tower.et);
            fine_grain |= tower.ecal_fine_grain;
            feature_bits |= tower.hcal_feature_bits;
            saturated |= tower.is_saturated();
        }
        self.et = if saturated {
            REGION_ET_MASK
        } else {
            sum.min(REGION_ET_MASK)
        };
        self.fine_grain = fine_grain;
        self.feature_bits = feature_bits;
        self.saturated = saturated;
        Ok(())
    }
}
