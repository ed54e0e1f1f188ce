//! Concatenated per-event hit view and the identifier → index map.

use std::collections::HashMap;
use std::ops::Index;

use calo_geometry::HitId;
use serde::{Deserialize, Serialize};

/// One reconstructed calorimeter hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecHit {
    pub id: HitId,
    /// Deposited energy in GeV.
    pub energy: f32,
}

impl RecHit {
    pub const fn new(id: HitId, energy: f32) -> Self {
        Self { id, energy }
    }
}

/// Mapping from a hit identifier to its index in the concatenated view,
/// supplied fresh for every event.
pub type HitIndexMap = HashMap<HitId, usize>;

/// Read-only view concatenating several hit collections into one logically
/// indexable sequence. Indices run through the collections in the order
/// they were added.
#[derive(Debug, Clone, Default)]
pub struct HitView<'e> {
    slices: Vec<&'e [RecHit]>,
    len: usize,
}

impl<'e> HitView<'e> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one collection to the view.
    pub fn add_collection(&mut self, hits: &'e [RecHit]) {
        self.len += hits.len();
        self.slices.push(hits);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hit at a global index, or `None` past the end.
    pub fn get(&self, mut index: usize) -> Option<&RecHit> {
        for slice in &self.slices {
            if index < slice.len() {
                return Some(&slice[index]);
            }
            index -= slice.len();
        }
        None
    }

    /// Build the identifier → index map for this view. Real events supply
    /// the map from the hit producer; this is the equivalent construction
    /// for standalone use and fixtures.
    pub fn index_map(&self) -> HitIndexMap {
        let mut map = HitIndexMap::with_capacity(self.len);
        let mut index = 0usize;
        for slice in &self.slices {
            for hit in *slice {
                map.insert(hit.id, index);
                index += 1;
            }
        }
        map
    }
}

impl Index<usize> for HitView<'_> {
    type Output = RecHit;

    fn index(&self, index: usize) -> &RecHit {
        self.get(index)
            .unwrap_or_else(|| panic!("hit index {} out of range ({} hits)", index, self.len))
    }
}
