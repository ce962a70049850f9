//! Board representation and game-history types.
//!
//! Contains the bitboard and square primitives, the side-relative chess
//! board, single-ply positions, and the position history the encoder reads.

pub mod bitboard;
pub mod castling;
pub mod chess_board;
pub mod history;
pub mod position;
pub mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::Castlings;
pub use chess_board::{Board, PieceType, ALL_PIECE_TYPES};
pub use history::PositionHistory;
pub use position::Position;
pub use square::Square;
