//! # Cluster Tools
//!
//! Per-event numeric aggregation over externally supplied calorimeter
//! clusters and reconstructed hits.
//!
//! ## Architecture
//!
//! - **Ports** (`ports.rs`): the [`GeometryLookup`] driven port through
//!   which the external geometry service supplies layer indices and cell
//!   positions.
//! - **Hits** (`hits.rs`): [`HitView`], a concatenated read-only view over
//!   the per-event hit collections, plus the identifier → index map type.
//! - **Domain** (`cluster.rs`): the cluster and multi-cluster value types.
//! - **Tools** (`tools.rs`): [`ClusterTools`], bound to one event's hits and
//!   geometry snapshot at construction.
//!
//! ## Event discipline
//!
//! A `ClusterTools` value is built fresh for every event from that event's
//! hit collections and index map; queries are read-only and synchronous.
//! Hits referenced by a cluster but absent from the index map are skipped,
//! not errors. Undefined numeric results use documented sentinels
//! (`-1.0` hadron fraction) or absence (`widths`), never panics.

pub mod cluster;
pub mod error;
pub mod hits;
pub mod ports;
pub mod tools;

// Re-exports for convenience
pub use cluster::{CaloCluster, MultiCluster, Point};
pub use error::ClusterToolsError;
pub use hits::{HitIndexMap, HitView, RecHit};
pub use ports::{EtaPhi, GeometryLookup};
pub use tools::{ClusterTools, ShowerWidths};
