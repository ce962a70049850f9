//! Plane expansion into dense network input.
//!
//! Each plane becomes 64 floats, square `k` at offset `k`; planes are laid
//! out back to back in layout order, giving `[112, 64]` per position.

use super::layout::{INPUT_PLANES, SQUARES};
use super::plane::{InputPlanes, Plane};

impl Plane {
    /// The plane as 64 floats: `value` where the mask is set, 0 elsewhere.
    pub fn expand(&self) -> [f32; SQUARES] {
        let mut out = [0.0f32; SQUARES];
        for sq in self.mask() {
            out[sq.index()] = self.value();
        }
        out
    }
}

impl InputPlanes {
    /// Flat `[112 * 64]` f32 tensor, plane-major.
    pub fn to_tensor(&self) -> Vec<f32> {
        let mut tensor = Vec::with_capacity(INPUT_PLANES * SQUARES);
        for plane in self {
            tensor.extend_from_slice(&plane.expand());
        }
        tensor
    }

    /// `[112, 8, 8]` array view of [`InputPlanes::to_tensor`].
    #[cfg(feature = "neural")]
    pub fn to_array(&self) -> Result<ndarray::Array3<f32>, ndarray::ShapeError> {
        ndarray::Array3::from_shape_vec((INPUT_PLANES, 8, 8), self.to_tensor())
    }
}

/// Flat `[N * 112 * 64]` tensor for a batch of positions.
pub fn flatten_batch(batch: &[InputPlanes]) -> Vec<f32> {
    let mut tensor = Vec::with_capacity(batch.len() * INPUT_PLANES * SQUARES);
    for planes in batch {
        for plane in planes {
            tensor.extend_from_slice(&plane.expand());
        }
    }
    tensor
}

/// `[N, 112, 8, 8]` array for a batch of positions.
#[cfg(feature = "neural")]
pub fn stack_batch(batch: &[InputPlanes]) -> Result<ndarray::Array4<f32>, ndarray::ShapeError> {
    ndarray::Array4::from_shape_vec((batch.len(), INPUT_PLANES, 8, 8), flatten_batch(batch))
}
