//! Firmware-version encoding strategies for the tower stage.
//!
//! The Layer-1 hardware went through four documented firmware revisions;
//! the version is fixed when a [`crate::Layer1`] is constructed and selects
//! the tower-encoding rule:
//!
//! - **V0**: initial version. Per-calo lookup clamps each input to 8 bits,
//!   the clamped inputs are summed into 9 bits, and the 0.25 → 0.5 GeV
//!   rescale divides the summed value after the lookup.
//! - **V1**: forwards saturated-tower codes downstream: a tower with either
//!   input at the 8-bit ceiling encodes as the saturation code instead of a
//!   numeric ET.
//! - **V2**: all-LUT processing. The complete V1 rule is evaluated through a
//!   single precomputed table; numeric results are unchanged.
//! - **V3**: handles forward-calorimeter saturation codes, moves the rescale
//!   division inside the per-calo lookup, and considers the hadronic-endcap
//!   saturation together with the electromagnetic one before decompression:
//!   a forward tower saturates on its HCAL input alone, a central tower only
//!   when both inputs sit at the ceiling.

use serde::{Deserialize, Serialize};

use super::{INPUT_ET_MASK, TOWER_ET_MASK, TOWER_SATURATION_CODE};
use crate::error::Layer1Error;

/// Layer-1 hardware firmware version, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirmwareVersion {
    /// Initial version for first-year running.
    V0,
    /// Update to include saturated tower codes to Layer-2.
    V1,
    /// Update for all-LUT processing, no change in numeric behavior.
    V2,
    /// Update to handle forward saturation codes, divide inside the LUT,
    /// and consider hadronic-endcap saturation before decompression.
    V3,
}

impl FirmwareVersion {
    /// Parse a numeric firmware version as carried in run configuration.
    pub fn from_number(version: u32) -> Result<Self, Layer1Error> {
        match version {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            _ => Err(Layer1Error::UnknownFirmware { version }),
        }
    }

    /// Numeric form of the version.
    pub fn number(self) -> u32 {
        match self {
            Self::V0 => 0,
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }
}

/// Tower-stage encoder dispatching on the firmware version.
///
/// For V2 the full (ecal, hcal) input plane is tabulated once here, so the
/// per-tower step is a single lookup; the table is built from the V1 rule
/// and is numerically identical to it.
pub struct TowerEncoder {
    version: FirmwareVersion,
    all_lut: Option<Box<[u16]>>,
}

impl TowerEncoder {
    const LUT_SIZE: usize = ((INPUT_ET_MASK + 1) * (INPUT_ET_MASK + 1)) as usize;

    pub fn new(version: FirmwareVersion) -> Self {
        let all_lut = match version {
            FirmwareVersion::V2 => {
                let mut table = vec![0u16; Self::LUT_SIZE].into_boxed_slice();
                for ecal in 0..=INPUT_ET_MASK {
                    for hcal in 0..=INPUT_ET_MASK {
                        let slot = (ecal * (INPUT_ET_MASK + 1) + hcal) as usize;
                        table[slot] = Self::encode_v1(ecal, hcal) as u16;
                    }
                }
                Some(table)
            }
            _ => None,
        };
        Self { version, all_lut }
    }

    pub fn version(&self) -> FirmwareVersion {
        self.version
    }

    /// Encode one tower's raw inputs. `forward` marks towers in the forward
    /// calorimeter, where only the HCAL compartment exists.
    ///
    /// Inputs must already be masked to 8 bits by the fill path.
    pub fn encode(&self, ecal_et: u32, hcal_et: u32, forward: bool) -> u32 {
        debug_assert!(ecal_et <= INPUT_ET_MASK && hcal_et <= INPUT_ET_MASK);
        match self.version {
            FirmwareVersion::V0 => Self::encode_v0(ecal_et, hcal_et),
            FirmwareVersion::V1 => Self::encode_v1(ecal_et, hcal_et),
            FirmwareVersion::V2 => {
                let slot = (ecal_et * (INPUT_ET_MASK + 1) + hcal_et) as usize;
                // Table is always present for V2
                self.all_lut.as_ref().map(|lut| lut[slot] as u32).unwrap_or_else(|| {
                    Self::encode_v1(ecal_et, hcal_et)
                })
            }
            FirmwareVersion::V3 => Self::encode_v3(ecal_et, hcal_et, forward),
        }
    }

    /// Baseline: clamp, sum into 9 bits, divide after the lookup.
    fn encode_v0(ecal_et: u32, hcal_et: u32) -> u32 {
        let sum = (ecal_et & INPUT_ET_MASK) + (hcal_et & INPUT_ET_MASK);
        sum.min(TOWER_ET_MASK) / 2
    }

    /// As V0, but either input at the ceiling emits the saturation code.
    fn encode_v1(ecal_et: u32, hcal_et: u32) -> u32 {
        if ecal_et == INPUT_ET_MASK || hcal_et == INPUT_ET_MASK {
            return TOWER_SATURATION_CODE;
        }
        Self::encode_v0(ecal_et, hcal_et)
    }

    /// Division inside the per-calo lookup; saturation combines the forward
    /// and hadronic-endcap checks before decompression.
    fn encode_v3(ecal_et: u32, hcal_et: u32, forward: bool) -> u32 {
        let saturated = if forward {
            hcal_et == INPUT_ET_MASK
        } else {
            ecal_et == INPUT_ET_MASK && hcal_et == INPUT_ET_MASK
        };
        if saturated {
            return TOWER_SATURATION_CODE;
        }
        let sum = (ecal_et & INPUT_ET_MASK) / 2 + (hcal_et & INPUT_ET_MASK) / 2;
        sum.min(TOWER_ET_MASK)
    }
}
