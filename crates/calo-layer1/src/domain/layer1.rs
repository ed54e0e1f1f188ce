//! The Layer-1 event orchestrator.
//!
//! `Layer1` owns the full detector as three flat arenas of value records
//! (towers, regions, crates) laid out in route order, so the region stage
//! reads its member towers as one contiguous slice and the crate stage reads
//! its member regions the same way. Routing from a logical index to an arena
//! slot is O(1) arithmetic through [`CaloGeometry`]; no nested ownership, no
//! pointer chasing.
//!
//! Event discipline (caller contract, not an internal lock): fill via
//! `set_ecal_data` / `set_hcal_data` (or start from `clear_event`), then
//! `process()`, then read. Selective filling without `clear_event` is
//! supported provided every tower that was nonzero in the previous event is
//! re-set or cleared; see `clear_event` docs.

use std::fmt;

use calo_geometry::{
    CaloGeometry, CrateIndex, RegionIndex, RegionRoute, TowerIndex, TowerRoute,
};
use tracing::{debug, trace};

use super::crate_unit::CrateRecord;
use super::firmware::{FirmwareVersion, TowerEncoder};
use super::region::RegionRecord;
use super::tower::TowerRecord;
use crate::error::Layer1Error;

/// Top-level Layer-1 aggregator for one detector readout.
///
/// Not `Clone`: the arena is the identity of the event state and duplicating
/// it mid-event is always a bug.
pub struct Layer1 {
    geometry: CaloGeometry,
    encoder: TowerEncoder,
    towers: Vec<TowerRecord>,
    regions: Vec<RegionRecord>,
    crates: Vec<CrateRecord>,
    uct_summary: u32,
}

impl Layer1 {
    /// Build the full fixed tower/region/crate arena. The firmware version
    /// is immutable thereafter.
    pub fn new(geometry: CaloGeometry, firmware: FirmwareVersion) -> Result<Self, Layer1Error> {
        let mut towers = Vec::with_capacity(CaloGeometry::N_TOWERS);
        let mut regions = Vec::with_capacity(CaloGeometry::N_REGIONS);
        let mut crates = Vec::with_capacity(CaloGeometry::N_CRATES);
        for crate_index in 0..CaloGeometry::N_CRATES {
            crates.push(CrateRecord::new(CrateIndex(crate_index as u32)));
            for region_slot in 0..CaloGeometry::REGIONS_IN_CRATE {
                let route = RegionRoute {
                    crate_index,
                    region_slot,
                };
                regions.push(RegionRecord::new(geometry.region_index_of(route)?));
                for tower_slot in 0..CaloGeometry::TOWERS_IN_REGION {
                    let route = TowerRoute {
                        crate_index,
                        region_slot,
                        tower_slot,
                    };
                    towers.push(TowerRecord::new(geometry.tower_index_of(route)?));
                }
            }
        }
        debug!(
            firmware = firmware.number(),
            towers = towers.len(),
            regions = regions.len(),
            crates = crates.len(),
            "constructed layer1 arena"
        );
        Ok(Self {
            geometry,
            encoder: TowerEncoder::new(firmware),
            towers,
            regions,
            crates,
            uct_summary: 0,
        })
    }

    /// Convenience constructor from the numeric firmware version carried in
    /// run configuration.
    pub fn with_version_number(
        geometry: CaloGeometry,
        version: u32,
    ) -> Result<Self, Layer1Error> {
        Self::new(geometry, FirmwareVersion::from_number(version)?)
    }

    pub fn firmware(&self) -> FirmwareVersion {
        self.encoder.version()
    }

    /// Event-level trigger summary word, populated by `process()`.
    pub fn summary(&self) -> u32 {
        self.uct_summary
    }

    /// Alias for [`Self::summary`], matching the trigger naming.
    pub fn et(&self) -> u32 {
        self.uct_summary
    }

    /// The owned crate records, for iteration by trusted collaborators.
    pub fn crates(&self) -> &[CrateRecord] {
        &self.crates
    }

    /// Mutable access for trusted collaborators; consistency of mutations
    /// with the tower arena is the caller's responsibility.
    pub fn crates_mut(&mut self) -> &mut [CrateRecord] {
        &mut self.crates
    }

    /// Zero out the event for selective tower filling.
    ///
    /// Calling this can be avoided when every tower that was nonzero in the
    /// previous event is re-set for the current one; skipping it otherwise
    /// leaks stale tower payloads into the next `process()`.
    pub fn clear_event(&mut self) -> Result<(), Layer1Error> {
        self.check_shape()?;
        for tower in &mut self.towers {
            tower.clear();
        }
        for region in &mut self.regions {
            region.clear();
        }
        for unit in &mut self.crates {
            unit.clear();
        }
        self.uct_summary = 0;
        Ok(())
    }

    /// Store one tower's ECAL input. To be called for each nonzero tower.
    pub fn set_ecal_data(
        &mut self,
        index: TowerIndex,
        fine_grain: bool,
        et: u32,
    ) -> Result<(), Layer1Error> {
        let slot = self.tower_slot(index)?;
        self.towers[slot].set_ecal(fine_grain, et);
        Ok(())
    }

    /// Store one tower's HCAL input. To be called for each nonzero tower.
    pub fn set_hcal_data(
        &mut self,
        index: TowerIndex,
        feature_bits: u32,
        et: u32,
    ) -> Result<(), Layer1Error> {
        let slot = self.tower_slot(index)?;
        self.towers[slot].set_hcal(feature_bits, et);
        Ok(())
    }

    /// Run the three-stage pipeline: tower encoding, region roll-up, crate
    /// roll-up plus the event summary. Stages run in this order for every
    /// event; earlier stages never read later ones.
    pub fn process(&mut self) -> Result<(), Layer1Error> {
        self.check_shape()?;

        for tower in &mut self.towers {
            let forward = self.geometry.is_forward(tower.index);
            tower.et = self.encoder.encode(tower.ecal_et, tower.hcal_et, forward);
            tower.touched = false;
        }
        trace!("tower stage complete");

        for (slot, region) in self.regions.iter_mut().enumerate() {
            let base = slot * CaloGeometry::TOWERS_IN_REGION;
            region.aggregate(&self.towers[base..base + CaloGeometry::TOWERS_IN_REGION])?;
        }
        trace!("region stage complete");

        let mut summary: u32 = 0;
        for (slot, unit) in self.crates.iter_mut().enumerate() {
            let base = slot * CaloGeometry::REGIONS_IN_CRATE;
            unit.aggregate(&self.regions[base..base + CaloGeometry::REGIONS_IN_CRATE])?;
            summary = summary.saturating_add(unit.et);
        }
        self.uct_summary = summary;
        debug!(summary = self.uct_summary, "event processed");
        Ok(())
    }

    /// Read one region's aggregate; `None` on a routing miss.
    pub fn region(&self, index: RegionIndex) -> Option<&RegionRecord> {
        let route = self.geometry.resolve_region(index)?;
        self.regions
            .get(route.crate_index * CaloGeometry::REGIONS_IN_CRATE + route.region_slot)
    }

    /// Read one tower's record; `None` on a routing miss.
    pub fn tower(&self, index: TowerIndex) -> Option<&TowerRecord> {
        let route = self.geometry.resolve_tower(index)?;
        self.towers.get(Self::flat_tower_slot(route))
    }

    fn flat_tower_slot(route: TowerRoute) -> usize {
        (route.crate_index * CaloGeometry::REGIONS_IN_CRATE + route.region_slot)
            * CaloGeometry::TOWERS_IN_REGION
            + route.tower_slot
    }

    fn tower_slot(&self, index: TowerIndex) -> Result<usize, Layer1Error> {
        match self.geometry.resolve_tower(index) {
            Some(route) => Ok(Self::flat_tower_slot(route)),
            None => {
                debug!(eta = index.eta, phi = index.phi, "tower routing miss");
                Err(Layer1Error::UnknownTower {
                    eta: index.eta,
                    phi: index.phi,
                })
            }
        }
    }

    fn check_shape(&self) -> Result<(), Layer1Error> {
        if self.towers.len() != CaloGeometry::N_TOWERS
            || self.regions.len() != CaloGeometry::N_REGIONS
            || self.crates.len() != CaloGeometry::N_CRATES
        {
            return Err(Layer1Error::MalformedTree {
                detail: format!(
                    "arena shape {}t/{}r/{}c does not match geometry {}t/{}r/{}c",
                    self.towers.len(),
                    self.regions.len(),
                    self.crates.len(),
                    CaloGeometry::N_TOWERS,
                    CaloGeometry::N_REGIONS,
                    CaloGeometry::N_CRATES,
                ),
            });
        }
        Ok(())
    }
}

/// Human-readable dump of the full hierarchy: crates, nonzero regions, and
/// nonzero towers. Diagnostics only, not a wire format.
impl fmt::Display for Layer1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Layer1 firmware=V{} summary={}",
            self.firmware().number(),
            self.uct_summary
        )?;
        for (crate_slot, unit) in self.crates.iter().enumerate() {
            writeln!(
                f,
                "  {} et={} saturated={}",
                unit.index, unit.et, unit.saturated
            )?;
            let region_base = crate_slot * CaloGeometry::REGIONS_IN_CRATE;
            for (region_slot, region) in self.regions
                [region_base..region_base + CaloGeometry::REGIONS_IN_CRATE]
                .iter()
                .enumerate()
            {
                if region.et == 0 && !region.fine_grain && region.feature_bits == 0 {
                    continue;
                }
                writeln!(
                    f,
                    "    {} et={} fg={} fb={:#x} saturated={}",
                    region.index, region.et, region.fine_grain, region.feature_bits,
                    region.saturated
                )?;
                let tower_base =
                    (region_base + region_slot) * CaloGeometry::TOWERS_IN_REGION;
                for tower in &self.towers
                    [tower_base..tower_base + CaloGeometry::TOWERS_IN_REGION]
                {
                    if !tower.has_payload() && tower.et == 0 {
                        continue;
                    }
                    writeln!(
                        f,
                        "      {} ecal={} fg={} hcal={} fb={:#x} et={}{}",
                        tower.index,
                        tower.ecal_et,
                        tower.ecal_fine_grain,
                        tower.hcal_et,
                        tower.hcal_feature_bits,
                        tower.et,
                        if tower.touched { " *" } else { "" },
                    )?;
                }
            }
        }
        Ok(())
    }
}
