//! # Calo Layer-1
//!
//! Level-1 calorimeter trigger aggregation subsystem.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure in-memory aggregation, no I/O
//!   - `Layer1`: the event orchestrator owning the full tower arena
//!   - `TowerRecord` / `RegionRecord` / `CrateRecord`: flat value records
//!   - `FirmwareVersion` / `TowerEncoder`: the encoding strategy selected
//!     once at construction
//!
//! ## Data flow
//!
//! One event at a time: fill (`set_ecal_data` / `set_hcal_data`, or
//! `clear_event` for an all-zero start), then `process()`, then read back via
//! `tower` / `region` / `crates` / `summary`.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: the tower → region → crate tree shape is fixed at
//!   construction (geometry constants) and never changes at runtime; only
//!   per-tower payloads vary between events.
//! - **INVARIANT-2**: `process()` runs its three stages in dependency order
//!   (towers, then regions, then crates/summary); reads before `process()`
//!   see the previous event's aggregates.
//!
//! ## Usage Example
//!
//! ```ignore
//! use calo_geometry::{CaloGeometry, TowerIndex};
//! use calo_layer1::{FirmwareVersion, Layer1};
//!
//! let mut layer1 = Layer1::new(CaloGeometry::new(), FirmwareVersion::V3)?;
//! layer1.clear_event()?;
//! layer1.set_ecal_data(TowerIndex::new(5, 20), false, 40)?;
//! layer1.set_hcal_data(TowerIndex::new(5, 20), 0, 24)?;
//! layer1.process()?;
//! let total = layer1.summary();
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    CrateRecord, FirmwareVersion, Layer1, RegionRecord, TowerRecord, CRATE_ET_MASK,
    INPUT_ET_MASK, REGION_ET_MASK, TOWER_ET_MASK, TOWER_SATURATION_CODE,
};
pub use error::Layer1Error;
