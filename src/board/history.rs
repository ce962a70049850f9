//! Game history: the ordered list of positions from the game start to the
//! current ply.

use super::chess_board::Board;
use super::position::Position;

/// Append-only sequence of positions, index 0 being the game start.
///
/// Always holds at least one position; there is no way to build or truncate
/// an empty history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionHistory {
    positions: Vec<Position>,
}

impl PositionHistory {
    /// Starts a history at the given position.
    pub fn new(start: Position) -> Self {
        PositionHistory {
            positions: vec![start],
        }
    }

    /// Starts a history at the standard starting position.
    pub fn startpos() -> Self {
        PositionHistory::new(Position::startpos())
    }

    /// Appends a fully specified position.
    pub fn push(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Appends the board reached by the next ply, computing its repetition
    /// count from earlier positions.
    pub fn push_board(&mut self, board: Board, no_progress_ply: u32) {
        let repetitions = self.count_repetitions(&board, no_progress_ply);
        let game_ply = self.last().game_ply() + 1;
        self.positions
            .push(Position::new(board, repetitions, no_progress_ply, game_ply));
    }

    /// Number of earlier occurrences of `board` with the same side to move,
    /// looking back no further than the last capture or pawn move.
    fn count_repetitions(&self, board: &Board, no_progress_ply: u32) -> u32 {
        // A repeat needs at least two plies by each side.
        if no_progress_ply < 4 {
            return 0;
        }
        for pos in self.positions.iter().rev().skip(1).step_by(2) {
            if pos.board() == board {
                return pos.repetitions() + 1;
            }
            if pos.no_progress_ply() < 2 {
                return 0;
            }
        }
        0
    }

    /// Drops positions past `len`, keeping at least the first one.
    pub fn truncate(&mut self, len: usize) {
        self.positions.truncate(len.max(1));
    }

    /// The current position.
    pub fn last(&self) -> &Position {
        // Never empty: every constructor pushes a start position.
        &self.positions[self.positions.len() - 1]
    }

    /// The game's first stored position.
    pub fn starting_position(&self) -> &Position {
        &self.positions[0]
    }

    /// Position at `idx`, or None past the current ply.
    pub fn get(&self, idx: usize) -> Option<&Position> {
        self.positions.get(idx)
    }

    /// Position at `idx`. Panics if `idx >= len()`.
    pub fn position_at(&self, idx: usize) -> &Position {
        &self.positions[idx]
    }

    /// Number of stored positions, at least 1.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_black_to_move(&self) -> bool {
        self.last().is_black_to_move()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl Default for PositionHistory {
    fn default() -> Self {
        PositionHistory::startpos()
    }
}
