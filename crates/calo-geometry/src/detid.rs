//! Detector identifiers for reconstructed hits.
//!
//! A [`HitId`] names one readout cell in the endcap/forward calorimeters and
//! is the key of the per-event hit-index map consumed by `cluster-tools`.
//! The section predicates encode which subdetectors count as
//! electromagnetic and which as hadronic when deriving cluster quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calorimeter section a hit cell belongs to.
///
/// The `Legacy*` variants cover the older forward/endcap readout that can
/// still appear in mixed hit collections; they map onto the same
/// electromagnetic/hadronic split as the silicon and scintillator sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorSection {
    /// Endcap silicon, electromagnetic compartment.
    EmSilicon,
    /// Legacy forward readout, electromagnetic compartment.
    LegacyEmForward,
    /// Endcap silicon, hadronic compartment.
    HadronSilicon,
    /// Endcap scintillator, hadronic compartment.
    HadronScintillator,
    /// Legacy forward hadronic readout.
    LegacyForwardHadron,
    /// Legacy endcap HCAL readout.
    LegacyHcalEndcap,
}

impl DetectorSection {
    /// True for sections whose energy counts toward the hadronic sum.
    pub fn is_hadronic(self) -> bool {
        matches!(
            self,
            Self::HadronSilicon
                | Self::HadronScintillator
                | Self::LegacyForwardHadron
                | Self::LegacyHcalEndcap
        )
    }

    /// True for sections that belong to the electromagnetic compartment.
    pub fn is_electromagnetic(self) -> bool {
        matches!(self, Self::EmSilicon | Self::LegacyEmForward)
    }
}

/// Identifier of one reconstructed-hit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitId {
    /// Which calorimeter section the cell sits in.
    pub section: DetectorSection,
    /// Layer number within the section (1-based, before detector offset).
    pub layer: u32,
    /// Cell number within the layer.
    pub cell: u32,
}

impl HitId {
    pub const fn new(section: DetectorSection, layer: u32, cell: u32) -> Self {
        Self {
            section,
            layer,
            cell,
        }
    }
}

impl fmt::Display for HitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/L{}/C{}", self.section, self.layer, self.cell)
    }
}
