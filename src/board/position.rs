//! Single-ply position snapshot.

use super::chess_board::Board;

/// One ply of a game: the board plus the counters the encoder needs.
///
/// Created once per ply and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    repetitions: u32,
    no_progress_ply: u32,
    game_ply: u32,
}

impl Position {
    pub const fn new(board: Board, repetitions: u32, no_progress_ply: u32, game_ply: u32) -> Self {
        Position {
            board,
            repetitions,
            no_progress_ply,
            game_ply,
        }
    }

    /// The standard starting position with zeroed counters.
    pub const fn startpos() -> Self {
        Position::new(Board::startpos(), 0, 0, 0)
    }

    /// Board from the side to move's perspective.
    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Board from the opponent's perspective.
    pub fn them_board(&self) -> Board {
        self.board.mirrored()
    }

    /// How many times this position occurred earlier in the game.
    #[inline]
    pub const fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub const fn no_progress_ply(&self) -> u32 {
        self.no_progress_ply
    }

    /// Plies since the start of the game.
    #[inline]
    pub const fn game_ply(&self) -> u32 {
        self.game_ply
    }

    #[inline]
    pub const fn is_black_to_move(&self) -> bool {
        self.board.flipped()
    }
}
