//! Domain layer: energy-scale constants, the firmware encoding strategy,
//! and the flat tower/region/crate arena.

pub mod crate_unit;
pub mod firmware;
pub mod layer1;
pub mod region;
pub mod tower;

pub use crate_unit::CrateRecord;
pub use firmware::{FirmwareVersion, TowerEncoder};
pub use layer1::Layer1;
pub use region::RegionRecord;
pub use tower::TowerRecord;

/// Raw per-calo input mask (8 bits, 0.25 GeV LSB). An input equal to the
/// mask is input-saturated.
pub const INPUT_ET_MASK: u32 = 0xFF;

/// Encoded tower ET mask (9 bits, 0.5 GeV LSB).
pub const TOWER_ET_MASK: u32 = 0x1FF;

/// Saturated-tower code forwarded to Layer-2 (firmware >= 1). Shares the
/// top of the 9-bit range with the ET mask.
pub const TOWER_SATURATION_CODE: u32 = TOWER_ET_MASK;

/// Region ET mask (10 bits).
pub const REGION_ET_MASK: u32 = 0x3FF;

/// Crate ET mask (14 bits).
pub const CRATE_ET_MASK: u32 = 0x3FFF;
