//! # Property Tests
//!
//! proptest invariants spanning the aggregation pipeline:
//!
//! - set → process → read round-trips raw tower inputs for every valid index
//! - region aggregation is order-independent in the fill sequence
//! - multi-cluster energy is the exact member sum

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use calo_geometry::{CaloGeometry, HitId, TowerIndex};
    use calo_layer1::{FirmwareVersion, Layer1};
    use cluster_tools::{
        CaloCluster, ClusterTools, EtaPhi, GeometryLookup, HitIndexMap, MultiCluster, Point,
    };
    use proptest::prelude::*;

    fn arb_tower_index() -> impl Strategy<Value = TowerIndex> {
        (
            prop_oneof![-32i32..=-1, 1i32..=32],
            0u32..CaloGeometry::TOWERS_IN_PHI as u32,
        )
            .prop_map(|(eta, phi)| TowerIndex::new(eta, phi))
    }

    struct NullGeometry;

    impl GeometryLookup for NullGeometry {
        fn layer_of(&self, id: HitId) -> u32 {
            id.layer
        }

        fn last_em_layer(&self) -> u32 {
            28
        }

        fn position_of(&self, _id: HitId) -> Option<EtaPhi> {
            None
        }
    }

    proptest! {
        // Arena construction dominates each case, so keep the case count low.
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_set_process_read_round_trips_raw_inputs(
            index in arb_tower_index(),
            ecal in 0u32..=0xFF,
            hcal in 0u32..=0xFF,
            fine_grain: bool,
            feature_bits in 0u32..16,
        ) {
            let mut l1 = Layer1::new(CaloGeometry::new(), FirmwareVersion::V0).unwrap();
            l1.clear_event().unwrap();
            l1.set_ecal_data(index, fine_grain, ecal).unwrap();
            l1.set_hcal_data(index, feature_bits, hcal).unwrap();
            l1.process().unwrap();

            let tower = l1.tower(index).unwrap();
            prop_assert_eq!(tower.ecal_et, ecal);
            prop_assert_eq!(tower.ecal_fine_grain, fine_grain);
            prop_assert_eq!(tower.hcal_et, hcal);
            prop_assert_eq!(tower.hcal_feature_bits, feature_bits);
            prop_assert_eq!(tower.et, (ecal + hcal).min(0x1FF) / 2);
        }

        #[test]
        fn prop_region_et_is_fill_order_independent(
            ets in proptest::collection::vec(0u32..=0xFE, 16),
            seed in 0usize..16,
        ) {
            // the 16 towers of region (1, 0) in two different fill orders
            let indices: Vec<TowerIndex> = (1..=4)
                .flat_map(|eta| (0..4).map(move |phi| TowerIndex::new(eta, phi)))
                .collect();

            let mut forward = Layer1::new(CaloGeometry::new(), FirmwareVersion::V0).unwrap();
            forward.clear_event().unwrap();
            for (i, &index) in indices.iter().enumerate() {
                forward.set_hcal_data(index, 0, ets[i]).unwrap();
            }
            forward.process().unwrap();

            let mut rotated = Layer1::new(CaloGeometry::new(), FirmwareVersion::V0).unwrap();
            rotated.clear_event().unwrap();
            for offset in 0..indices.len() {
                let i = (offset + seed) % indices.len();
                rotated.set_hcal_data(indices[i], 0, ets[i]).unwrap();
            }
            rotated.process().unwrap();

            prop_assert_eq!(
                forward.region(calo_geometry::RegionIndex::new(1, 0)).unwrap().et,
                rotated.region(calo_geometry::RegionIndex::new(1, 0)).unwrap().et
            );
            prop_assert_eq!(forward.summary(), rotated.summary());
        }

        #[test]
        fn prop_multi_cluster_energy_is_exact_sum(
            energies in proptest::collection::vec(0.0f64..1000.0, 0..12),
        ) {
            let map = HitIndexMap::new();
            let empty: Vec<cluster_tools::RecHit> = vec![];
            let tools =
                ClusterTools::new(&NullGeometry, &empty, &empty, &empty, &map).unwrap();

            let multi = MultiCluster::new(
                energies
                    .iter()
                    .map(|&e| CaloCluster::new(vec![], e, Point::origin(), 0.0, 0.0))
                    .collect(),
            );
            let expected: f64 = energies.iter().sum();
            prop_assert_eq!(tools.multi_cluster_energy(&multi), expected);
        }
    }

    /// Non-proptest spot check: a sub-percent member moves the centroid by
    /// no more than floating-point noise.
    #[test]
    fn test_sub_percent_member_does_not_move_centroid() {
        let map: HashMap<HitId, usize> = HashMap::new();
        let empty: Vec<cluster_tools::RecHit> = vec![];
        let tools = ClusterTools::new(&NullGeometry, &empty, &empty, &empty, &map).unwrap();

        let mut core = CaloCluster::new(vec![], 500.0, Point::origin(), 0.0, 0.0);
        core.position = Point::new(10.0, -20.0, 330.0);
        let mut dust = CaloCluster::new(vec![], 1.0, Point::origin(), 0.0, 0.0);
        dust.position = Point::new(-1000.0, 1000.0, -1000.0);

        let with_dust = tools.multi_cluster_position(&MultiCluster::new(vec![
            core.clone(),
            dust,
        ]));
        let without = tools.multi_cluster_position(&MultiCluster::new(vec![core]));
        assert!((with_dust.x - without.x).abs() < 1e-12);
        assert!((with_dust.y - without.y).abs() < 1e-12);
        assert!((with_dust.z - without.z).abs() < 1e-12);
    }
}
