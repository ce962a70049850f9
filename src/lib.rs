//! Chessplanes library.
//!
//! Exposes the board and history model, FEN protocol helpers, and the
//! neural network input plane encoder.

pub mod board;
pub mod config;
pub mod nn;
pub mod protocol;
