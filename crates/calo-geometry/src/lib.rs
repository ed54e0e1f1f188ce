//! # Calo Geometry Crate
//!
//! This crate contains the coordinate types, detector identifiers, and the
//! fixed routing geometry shared by `calo-layer1` and `cluster-tools`.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: tower/region/crate indices and detector
//!   identifiers are defined here and nowhere else.
//! - **Fixed-arity tree**: the tower → region → crate shape is a compile-time
//!   property of [`CaloGeometry`]; only per-event payloads vary at runtime.
//! - **Routing misses are values**: out-of-range lookups return `None`, never
//!   an error or a panic.

pub mod detid;
pub mod errors;
pub mod geometry;
pub mod indices;

pub use detid::{DetectorSection, HitId};
pub use errors::GeometryError;
pub use geometry::{CaloGeometry, RegionRoute, TowerRoute};
pub use indices::{CrateIndex, RegionIndex, TowerIndex};
