//! Driven port: the geometry service consumed by the cluster tools.
//!
//! The real coordinate transforms live in the surrounding framework; this
//! trait is the narrow read-only seam the tools query per lookup.

use calo_geometry::HitId;

/// Pseudorapidity/azimuth pair of a cell position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtaPhi {
    pub eta: f64,
    pub phi: f64,
}

/// Read-only geometry lookups, valid as a consistent snapshot for the
/// duration of one event.
pub trait GeometryLookup {
    /// Logical layer index of a cell, including the detector offset.
    fn layer_of(&self, id: HitId) -> u32;

    /// Last layer index of the electromagnetic section.
    fn last_em_layer(&self) -> u32;

    /// Position of a cell; `None` if the identifier is unknown to this
    /// geometry snapshot.
    fn position_of(&self, id: HitId) -> Option<EtaPhi>;
}
