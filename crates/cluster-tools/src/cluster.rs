//! Cluster and multi-cluster value types.
//!
//! Clusters are produced upstream and enter the tools read-only: a sequence
//! of (identifier, fraction) pairs plus a precomputed energy and centroid.
//! Fractions are per-hit weights in `0..=1`; hits may be shared between
//! clusters.

use calo_geometry::HitId;
use serde::{Deserialize, Serialize};

/// Cartesian point in detector coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A reconstructed calorimeter cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloCluster {
    /// Member cells with their energy fractions.
    pub hits_and_fractions: Vec<(HitId, f32)>,
    /// Total cluster energy in GeV.
    pub energy: f64,
    /// Cluster centroid in detector coordinates.
    pub position: Point,
    /// Centroid pseudorapidity.
    pub eta: f64,
    /// Centroid azimuth.
    pub phi: f64,
}

impl CaloCluster {
    pub fn new(
        hits_and_fractions: Vec<(HitId, f32)>,
        energy: f64,
        position: Point,
        eta: f64,
        phi: f64,
    ) -> Self {
        Self {
            hits_and_fractions,
            energy,
            position,
            eta,
            phi,
        }
    }
}

/// A collection of layer clusters treated as one object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiCluster {
    pub clusters: Vec<CaloCluster>,
}

impl MultiCluster {
    pub fn new(clusters: Vec<CaloCluster>) -> Self {
        Self { clusters }
    }
}
