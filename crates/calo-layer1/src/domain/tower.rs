//! Tower records: the smallest aggregation unit.

use calo_geometry::TowerIndex;
use serde::{Deserialize, Serialize};

use super::{INPUT_ET_MASK, TOWER_SATURATION_CODE};

/// Per-event payload and encoded result of one calorimeter tower.
///
/// Owned by the `Layer1` arena; mutated only through the fill path
/// (`set_ecal` / `set_hcal` / `clear`) and the encode stage of `process()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerRecord {
    /// Logical coordinate, fixed at construction.
    pub index: TowerIndex,
    /// Raw ECAL input ET (8 bits, 0.25 GeV LSB).
    pub ecal_et: u32,
    /// ECAL fine-grain flag.
    pub ecal_fine_grain: bool,
    /// Raw HCAL input ET (8 bits).
    pub hcal_et: u32,
    /// HCAL feature bits.
    pub hcal_feature_bits: u32,
    /// Encoded tower ET, valid after the tower stage of `process()`.
    pub et: u32,
    /// Set by the fill path, cleared by `process()`. Observability aid for
    /// the selective-filling contract; never gates behavior.
    pub touched: bool,
}

impl TowerRecord {
    pub fn new(index: TowerIndex) -> Self {
        Self {
            index,
            ecal_et: 0,
            ecal_fine_grain: false,
            hcal_et: 0,
            hcal_feature_bits: 0,
            et: 0,
            touched: false,
        }
    }

    /// Reset the payload and encoded value to the all-zero event state.
    pub fn clear(&mut self) {
        self.ecal_et = 0;
        self.ecal_fine_grain = false;
        self.hcal_et = 0;
        self.hcal_feature_bits = 0;
        self.et = 0;
        self.touched = false;
    }

    pub fn set_ecal(&mut self, fine_grain: bool, et: u32) {
        self.ecal_et = et & INPUT_ET_MASK;
        self.ecal_fine_grain = fine_grain;
        self.touched = true;
    }

    pub fn set_hcal(&mut self, feature_bits: u32, et: u32) {
        self.hcal_et = et & INPUT_ET_MASK;
        self.hcal_feature_bits = feature_bits;
        self.touched = true;
    }

    /// True when the encoded value carries the saturation code.
    pub fn is_saturated(&self) -> bool {
        self.et == TOWER_SATURATION_CODE
    }

    /// True when any raw input is nonzero.
    pub fn has_payload(&self) -> bool {
        self.ecal_et != 0 || self.hcal_et != 0
    }
}
