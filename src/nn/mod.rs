//! Neural network input encoding.
//!
//! Converts a `PositionHistory` into the 112-plane input the network was
//! trained on: eight 13-plane history groups followed by eight auxiliary
//! planes. Each plane is a square mask plus a broadcast value.

pub mod encoding;
pub mod layout;
pub mod plane;
pub mod tensor;

pub use encoding::{encode_batch, encode_position_for_nn, FillEmptyHistory};
pub use layout::{AuxPlane, HistorySlot, INPUT_PLANES, MOVE_HISTORY, PLANES_PER_BOARD};
pub use plane::{InputPlanes, Plane};
pub use tensor::flatten_batch;
#[cfg(feature = "neural")]
pub use tensor::stack_batch;
