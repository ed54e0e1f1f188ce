//! Error types for the cluster-analysis subsystem.

use thiserror::Error;

/// Errors that can occur while binding cluster tools to an event.
#[derive(Debug, Clone, Error)]
pub enum ClusterToolsError {
    /// The supplied hit-index map points past the concatenated hit view;
    /// the map and the hit collections are from different events.
    #[error("Hit map entry out of range: index {index} >= {hits} hits")]
    HitMapOutOfRange { index: usize, hits: usize },
}
