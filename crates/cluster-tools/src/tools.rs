//! The per-event cluster analysis tools.

use calo_geometry::HitId;
use tracing::debug;

use crate::cluster::{CaloCluster, MultiCluster, Point};
use crate::error::ClusterToolsError;
use crate::hits::{HitIndexMap, HitView, RecHit};
use crate::ports::GeometryLookup;

/// Energy-weighted and log-energy-weighted shower widths of a cluster.
///
/// Linear widths are normalized second moments; the log-weighted pair is
/// normalized only when the log-weight sum is nonzero, otherwise it holds
/// the raw accumulated value (possibly zero).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShowerWidths {
    pub eta_eta: f64,
    pub phi_phi: f64,
    pub eta_eta_log: f64,
    pub phi_phi_log: f64,
}

/// Cluster analysis bound to one event's hit collections and geometry
/// snapshot. Build a fresh value per event; all queries are read-only.
pub struct ClusterTools<'e, G: GeometryLookup> {
    geometry: &'e G,
    hits: HitView<'e>,
    hit_map: &'e HitIndexMap,
}

impl<'e, G: GeometryLookup> ClusterTools<'e, G> {
    /// Bind the tools to the current event: the electromagnetic, forward-
    /// hadronic, and barrel-hadronic hit collections are concatenated into
    /// one indexable view, addressed through the supplied identifier map.
    pub fn new(
        geometry: &'e G,
        ee_hits: &'e [RecHit],
        fh_hits: &'e [RecHit],
        bh_hits: &'e [RecHit],
        hit_map: &'e HitIndexMap,
    ) -> Result<Self, ClusterToolsError> {
        let mut hits = HitView::new();
        hits.add_collection(ee_hits);
        hits.add_collection(fh_hits);
        hits.add_collection(bh_hits);
        if let Some(&index) = hit_map.values().max() {
            if index >= hits.len() {
                return Err(ClusterToolsError::HitMapOutOfRange {
                    index,
                    hits: hits.len(),
                });
            }
        }
        debug!(hits = hits.len(), mapped = hit_map.len(), "bound event");
        Ok(Self {
            geometry,
            hits,
            hit_map,
        })
    }

    /// Fraction of the cluster's mapped energy deposited in hadronic
    /// sections. Returns `-1.0` when no mapped energy exists (undefined,
    /// not an error). Hits absent from the index map are skipped.
    pub fn cluster_hadron_fraction(&self, cluster: &CaloCluster) -> f32 {
        let mut energy = 0.0f32;
        let mut energy_had = 0.0f32;
        for &(id, fraction) in &cluster.hits_and_fractions {
            let Some(&index) = self.hit_map.get(&id) else {
                continue;
            };
            let hit_energy = self.hits[index].energy * fraction;
            energy += hit_energy;
            if id.section.is_hadronic() {
                energy_had += hit_energy;
            }
        }
        if energy > 0.0 {
            energy_had / energy
        } else {
            -1.0
        }
    }

    /// Sum of member-cluster energies; zero for an empty multi-cluster.
    pub fn multi_cluster_energy(&self, multi: &MultiCluster) -> f64 {
        multi.clusters.iter().map(|c| c.energy).sum()
    }

    /// Energy-weighted centroid of the member clusters, excluding members
    /// below 1% of the total energy. Returns the origin for an empty
    /// multi-cluster or zero included weight.
    pub fn multi_cluster_position(&self, multi: &MultiCluster) -> Point {
        if multi.clusters.is_empty() {
            return Point::origin();
        }
        let total_energy = self.multi_cluster_energy(multi);
        let mut acc = Point::origin();
        let mut total_weight = 0.0f64;
        for cluster in &multi.clusters {
            // cutoff < 1% contribution
            if total_energy != 0.0 && cluster.energy < 0.01 * total_energy {
                continue;
            }
            let weight = cluster.energy;
            acc.x += cluster.position.x * weight;
            acc.y += cluster.position.y * weight;
            acc.z += cluster.position.z * weight;
            total_weight += weight;
        }
        if total_weight != 0.0 {
            acc.x /= total_weight;
            acc.y /= total_weight;
            acc.z /= total_weight;
        }
        acc
    }

    /// Logical layer of a cell, delegated to the geometry service.
    pub fn layer_of(&self, id: HitId) -> u32 {
        self.geometry.layer_of(id)
    }

    /// Shower-shape second moments of the cluster's electromagnetic hits
    /// around its centroid.
    ///
    /// `None` when the cluster is empty, when its leading hit lies beyond
    /// the electromagnetic section's last layer, or when the total linear
    /// weight is zero (undefined widths). Skipped without error: hits with
    /// zero fraction, hits absent from the index map, and hits whose
    /// position is unknown to the geometry snapshot
    /// ([`GeometryLookup::position_of`] returns `None`; a skipped position
    /// also contributes no weight). Per-hit log weight is
    /// `max(0, 2 + ln(hit_energy / cluster_energy))`; the zero floor keeps
    /// low-energy tails from contributing negative weight.
    pub fn widths(&self, cluster: &CaloCluster) -> Option<ShowerWidths> {
        let (leading_id, _) = *cluster.hits_and_fractions.first()?;
        if self.layer_of(leading_id) > self.geometry.last_em_layer() {
            return None;
        }

        let mut widths = ShowerWidths::default();
        let mut sum_w = 0.0f64;
        let mut sum_log_w = 0.0f64;

        for &(id, fraction) in &cluster.hits_and_fractions {
            if fraction == 0.0 {
                continue;
            }
            if !id.section.is_electromagnetic() {
                continue;
            }
            let Some(&index) = self.hit_map.get(&id) else {
                continue;
            };
            let Some(cell) = self.geometry.position_of(id) else {
                continue;
            };
            let hit_energy = f64::from(self.hits[index].energy);

            let weight = hit_energy;
            // take w0=2
            let mut log_weight = 0.0;
            if cluster.energy != 0.0 {
                log_weight = (2.0 + (hit_energy / cluster.energy).ln()).max(0.0);
            }
            let delta_eta2 = (cell.eta - cluster.eta) * (cell.eta - cluster.eta);
            let delta_phi2 = (cell.phi - cluster.phi) * (cell.phi - cluster.phi);
            widths.eta_eta += delta_eta2 * weight;
            widths.phi_phi += delta_phi2 * weight;
            widths.eta_eta_log += delta_eta2 * log_weight;
            widths.phi_phi_log += delta_phi2 * log_weight;
            sum_w += weight;
            sum_log_w += log_weight;
        }

        if sum_w <= 0.0 {
            return None;
        }

        widths.eta_eta = (widths.eta_eta / sum_w).sqrt();
        widths.phi_phi = (widths.phi_phi / sum_w).sqrt();

        if sum_log_w != 0.0 {
            widths.eta_eta_log = (widths.eta_eta_log / sum_log_w).sqrt();
            widths.phi_phi_log = (widths.phi_phi_log / sum_log_w).sqrt();
        }

        Some(widths)
    }
}
