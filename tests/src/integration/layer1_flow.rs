//! # Layer-1 Integration Flows
//!
//! Full fill → process → read cycles against the complete detector arena,
//! covering:
//!
//! 1. **Event pipeline**: raw tower inputs roll up through regions and
//!    crates into the trigger summary word.
//! 2. **Event discipline**: `clear_event` semantics and the documented
//!    selective-filling contract.
//! 3. **Firmware matrix**: the documented V0-V3 behavioral differences on
//!    identical raw inputs.

#[cfg(test)]
mod tests {
    use calo_geometry::{CaloGeometry, RegionIndex, TowerIndex};
    use calo_layer1::{FirmwareVersion, Layer1, Layer1Error, TOWER_SATURATION_CODE};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn layer1(firmware: FirmwareVersion) -> Layer1 {
        crate::init_test_telemetry();
        Layer1::new(CaloGeometry::new(), firmware).expect("arena construction")
    }

    /// Fill one fully-populated event: every tower gets a small, position-
    /// dependent payload.
    fn fill_full_event(l1: &mut Layer1) {
        for eta in (-32..=32).filter(|&e| e != 0) {
            for phi in 0..72 {
                let index = TowerIndex::new(eta, phi);
                let et = ((eta.unsigned_abs() + phi) % 16) as u32;
                l1.set_ecal_data(index, false, et).unwrap();
                l1.set_hcal_data(index, 0, et / 2).unwrap();
            }
        }
    }

    // =========================================================================
    // EVENT PIPELINE
    // =========================================================================

    #[test]
    fn test_full_event_pipeline_populates_every_level() {
        let mut l1 = layer1(FirmwareVersion::V2);
        l1.clear_event().unwrap();
        fill_full_event(&mut l1);
        l1.process().unwrap();

        assert!(l1.summary() > 0, "full event must produce a nonzero summary");
        let crate_sum: u32 = l1.crates().iter().map(|c| c.et).sum();
        assert_eq!(l1.summary(), crate_sum, "summary is the sum over crates");

        // spot-check a region against its own towers
        let region = l1.region(RegionIndex::new(3, 7)).expect("valid region");
        let mut expected = 0;
        for eta in 9..=12 {
            for phi in 28..=31 {
                expected += l1.tower(TowerIndex::new(eta, phi)).unwrap().et;
            }
        }
        assert_eq!(region.et, expected);
    }

    #[test]
    fn test_summary_reachable_through_both_accessors() {
        let mut l1 = layer1(FirmwareVersion::V0);
        l1.clear_event().unwrap();
        l1.set_ecal_data(TowerIndex::new(10, 10), false, 50).unwrap();
        l1.process().unwrap();
        assert_eq!(l1.summary(), l1.et());
        assert_eq!(l1.summary(), 25);
    }

    #[test]
    fn test_reads_before_process_see_previous_event() {
        let mut l1 = layer1(FirmwareVersion::V0);
        l1.clear_event().unwrap();
        l1.set_ecal_data(TowerIndex::new(4, 4), false, 80).unwrap();
        l1.process().unwrap();
        let first_summary = l1.summary();

        // new fill without process: aggregates still show the old event
        l1.set_ecal_data(TowerIndex::new(4, 4), false, 8).unwrap();
        assert_eq!(l1.summary(), first_summary);
        let region = l1.region(RegionIndex::new(1, 1)).unwrap();
        assert_eq!(region.et, 40);

        l1.process().unwrap();
        assert_eq!(l1.summary(), 4);
    }

    // =========================================================================
    // EVENT DISCIPLINE
    // =========================================================================

    #[test]
    fn test_clear_event_resets_the_whole_tree() {
        let mut l1 = layer1(FirmwareVersion::V3);
        l1.clear_event().unwrap();
        fill_full_event(&mut l1);
        l1.process().unwrap();
        assert!(l1.summary() > 0);

        l1.clear_event().unwrap();
        l1.process().unwrap();
        assert_eq!(l1.summary(), 0);
        for eta in (-32..=32).filter(|&e| e != 0) {
            for phi in 0..72 {
                let tower = l1.tower(TowerIndex::new(eta, phi)).unwrap();
                assert_eq!(tower.et, 0, "tower {} not zero after clear", tower.index);
            }
        }
    }

    #[test]
    fn test_selective_fill_honours_reset_discipline() {
        let mut l1 = layer1(FirmwareVersion::V0);
        l1.clear_event().unwrap();
        l1.set_ecal_data(TowerIndex::new(1, 0), false, 20).unwrap();
        l1.set_ecal_data(TowerIndex::new(-1, 36), false, 40).unwrap();
        l1.process().unwrap();
        assert_eq!(l1.summary(), 30);

        // event 2: caller re-sets every previously nonzero tower, no clear
        l1.set_ecal_data(TowerIndex::new(1, 0), false, 8).unwrap();
        l1.set_ecal_data(TowerIndex::new(-1, 36), false, 0).unwrap();
        l1.process().unwrap();
        assert_eq!(l1.summary(), 4, "re-set discipline yields a clean event");
    }

    #[test]
    fn test_set_on_invalid_tower_reports_unknown_tower() {
        let mut l1 = layer1(FirmwareVersion::V1);
        for bad in [
            TowerIndex::new(0, 0),
            TowerIndex::new(33, 0),
            TowerIndex::new(-33, 71),
            TowerIndex::new(1, 72),
        ] {
            let err = l1.set_ecal_data(bad, false, 1).unwrap_err();
            assert!(
                matches!(err, Layer1Error::UnknownTower { .. }),
                "expected UnknownTower for {}, got {:?}",
                bad,
                err
            );
        }
    }

    // =========================================================================
    // FIRMWARE MATRIX
    // =========================================================================

    /// Run one single-tower event under a given firmware and return the
    /// encoded tower ET.
    fn encode_under(firmware: FirmwareVersion, ecal: u32, hcal: u32, forward: bool) -> u32 {
        let mut l1 = layer1(firmware);
        l1.clear_event().unwrap();
        let index = if forward {
            TowerIndex::new(30, 0)
        } else {
            TowerIndex::new(10, 0)
        };
        l1.set_ecal_data(index, false, ecal).unwrap();
        l1.set_hcal_data(index, 0, hcal).unwrap();
        l1.process().unwrap();
        l1.tower(index).unwrap().et
    }

    #[test]
    fn test_identical_inputs_agree_across_versions_when_unsaturated_even() {
        for (ecal, hcal) in [(0, 0), (2, 2), (40, 24), (100, 88)] {
            let v0 = encode_under(FirmwareVersion::V0, ecal, hcal, false);
            let v1 = encode_under(FirmwareVersion::V1, ecal, hcal, false);
            let v2 = encode_under(FirmwareVersion::V2, ecal, hcal, false);
            let v3 = encode_under(FirmwareVersion::V3, ecal, hcal, false);
            assert_eq!(v0, v1);
            assert_eq!(v1, v2);
            assert_eq!(v2, v3);
        }
    }

    #[test]
    fn test_saturated_tower_diverges_between_v0_and_v1() {
        let v0 = encode_under(FirmwareVersion::V0, 0xFF, 0, false);
        let v1 = encode_under(FirmwareVersion::V1, 0xFF, 0, false);
        assert_eq!(v0, 127);
        assert_eq!(v1, TOWER_SATURATION_CODE);
    }

    #[test]
    fn test_v0_v3_divergence_is_saturation_and_division_only() {
        // division placement
        assert_eq!(encode_under(FirmwareVersion::V0, 1, 1, false), 1);
        assert_eq!(encode_under(FirmwareVersion::V3, 1, 1, false), 0);
        // saturation handling
        assert_eq!(encode_under(FirmwareVersion::V0, 0xFF, 0xFF, false), 255);
        assert_eq!(
            encode_under(FirmwareVersion::V3, 0xFF, 0xFF, false),
            TOWER_SATURATION_CODE
        );
    }

    #[test]
    fn test_v3_forward_towers_saturate_on_hcal_alone() {
        assert_eq!(
            encode_under(FirmwareVersion::V3, 0, 0xFF, true),
            TOWER_SATURATION_CODE
        );
        // central towers with the same inputs do not
        assert_eq!(encode_under(FirmwareVersion::V3, 0, 0xFF, false), 127);
    }

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    #[test]
    fn test_diagnostic_dump_renders_nonzero_hierarchy() {
        let mut l1 = layer1(FirmwareVersion::V1);
        l1.clear_event().unwrap();
        l1.set_hcal_data(TowerIndex::new(-12, 50), 0b1, 30).unwrap();
        l1.process().unwrap();

        let dump = l1.to_string();
        assert!(dump.contains("Layer1 firmware=V1"));
        assert!(dump.contains("crate(2)"), "phi 50 routes to crate 2");
        assert!(dump.contains("tower(eta=-12, phi=50)"));
        // zero towers stay out of the dump
        assert!(!dump.contains("tower(eta=1, phi=0)"));
    }
}
