//! Text notation for positions.
//!
//! Positions enter and leave the crate as FEN strings; everything else
//! (move lists, engine protocols) belongs to the surrounding engine.

pub mod fen;

pub use fen::{encode_fen, parse_fen, FenError, STARTPOS_FEN};
