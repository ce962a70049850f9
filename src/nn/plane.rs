//! Input planes: a square mask plus one value broadcast over it.

use std::ops::Index;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use super::layout::{AuxPlane, HistorySlot, INPUT_PLANES, PLANES_PER_BOARD};
use crate::board::Bitboard;

/// One 8x8 input plane: `value` on every square in `mask`, 0 elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, Deserialize)]
pub struct Plane {
    mask: Bitboard,
    value: f32,
}

impl Plane {
    /// Empty mask, value 0.
    pub const fn empty() -> Self {
        Plane {
            mask: Bitboard::EMPTY,
            value: 0.0,
        }
    }

    /// Every square set to `value`.
    pub const fn full(value: f32) -> Self {
        Plane {
            mask: Bitboard::FULL,
            value,
        }
    }

    pub const fn from_bits(mask: Bitboard, value: f32) -> Self {
        Plane { mask, value }
    }

    #[inline]
    pub const fn mask(&self) -> Bitboard {
        self.mask
    }

    #[inline]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// True if no square of the expanded plane is non-zero.
    pub fn is_zero(&self) -> bool {
        self.mask.is_empty() || self.value == 0.0
    }
}

/// The full 112-plane network input for one position.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPlanes {
    planes: [Plane; INPUT_PLANES],
}

impl Default for InputPlanes {
    fn default() -> Self {
        InputPlanes::zeroed()
    }
}

impl InputPlanes {
    /// All 112 planes empty.
    pub const fn zeroed() -> Self {
        InputPlanes {
            planes: [Plane::empty(); INPUT_PLANES],
        }
    }

    /// Returns these planes with plane `index` replaced.
    pub(crate) fn with_plane(mut self, index: usize, plane: Plane) -> Self {
        self.planes[index] = plane;
        self
    }

    /// Returns these planes with history group `group` replaced.
    pub(crate) fn with_group(mut self, group: usize, planes: [Plane; PLANES_PER_BOARD]) -> Self {
        let base = group * PLANES_PER_BOARD;
        self.planes[base..base + PLANES_PER_BOARD].copy_from_slice(&planes);
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[Plane] {
        &self.planes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Plane> {
        self.planes.iter()
    }

    /// Always 112.
    pub const fn len(&self) -> usize {
        INPUT_PLANES
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The 13 planes of history group `group` (0 = current ply).
    pub fn group(&self, group: usize) -> &[Plane] {
        let base = group * PLANES_PER_BOARD;
        &self.planes[base..base + PLANES_PER_BOARD]
    }

    pub fn history(&self, group: usize, slot: HistorySlot) -> &Plane {
        &self.planes[slot.plane(group)]
    }

    pub fn aux(&self, aux: AuxPlane) -> &Plane {
        &self.planes[aux.index()]
    }
}

impl Index<usize> for InputPlanes {
    type Output = Plane;

    fn index(&self, index: usize) -> &Plane {
        &self.planes[index]
    }
}

impl<'a> IntoIterator for &'a InputPlanes {
    type Item = &'a Plane;
    type IntoIter = std::slice::Iter<'a, Plane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

/// Serialized as a plain sequence of 112 planes.
impl Serialize for InputPlanes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.planes.iter())
    }
}
