//! Position history -> 112-plane network input.
//!
//! Produces the exact plane layout the network was trained on (see
//! [`crate::nn::layout`]):
//!   [0:104]   eight 13-plane groups, most recent ply first, each seen from
//!             the side to move at that ply
//!   [104:106] castling rook squares, queenside then kingside
//!   [106:108] zero
//!   [108]     black to move
//!   [109]     no-progress ply count
//!   [110]     zero
//!   [111]     all ones
//!
//! When the history is shorter than the requested depth, the first stored
//! position may stand in for the missing plies, depending on
//! [`FillEmptyHistory`].

use std::ops::ControlFlow;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::layout::{AuxPlane, HistorySlot, MOVE_HISTORY, PLANES_PER_BOARD};
use super::plane::{InputPlanes, Plane};
use crate::board::{Bitboard, Board, Position, PositionHistory, Square, ALL_PIECE_TYPES};

/// What to do with history groups older than the first stored position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillEmptyHistory {
    /// Leave them zero.
    No,
    /// Repeat the first position, unless it is the standard start position.
    #[default]
    FenOnly,
    /// Always repeat the first position.
    Always,
}

/// Which way a history board is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Perspective {
    Direct,
    Mirrored,
}

impl Perspective {
    fn toggled(self) -> Perspective {
        match self {
            Perspective::Direct => Perspective::Mirrored,
            Perspective::Mirrored => Perspective::Direct,
        }
    }

    fn view(self, position: &Position) -> Board {
        match self {
            Perspective::Direct => *position.board(),
            Perspective::Mirrored => position.them_board(),
        }
    }
}

/// Encodes a position history into network input planes.
///
/// `history_planes` is the number of plies to encode and is clamped to 8.
pub fn encode_position_for_nn(
    history: &PositionHistory,
    history_planes: usize,
    fill_empty_history: FillEmptyHistory,
) -> InputPlanes {
    let planes = encode_aux_planes(InputPlanes::zeroed(), history.last());

    let last_idx = history.len() as isize - 1;
    let groups = history_planes.min(MOVE_HISTORY);

    let walk = (0..groups).try_fold(
        (Perspective::Direct, planes),
        |(perspective, planes), group| {
            let history_idx = last_idx - group as isize;
            let before_history = history_idx < 0;
            let position = history.position_at(history_idx.max(0) as usize);

            if before_history && stops_before_history(fill_empty_history, position) {
                return ControlFlow::Break(planes);
            }

            let board = perspective.view(position);
            let mut slots = history_group(&board, position.repetitions());
            if before_history {
                slots = undo_double_push(slots, &board);
            }
            let planes = planes.with_group(group, slots);

            // Stand-in plies do not alternate sides.
            let next = if history_idx > 0 {
                perspective.toggled()
            } else {
                perspective
            };
            ControlFlow::Continue((next, planes))
        },
    );

    match walk {
        ControlFlow::Continue((_, planes)) | ControlFlow::Break(planes) => planes,
    }
}

/// Encodes many independent histories in parallel. Output order follows
/// input order.
pub fn encode_batch(
    histories: &[PositionHistory],
    history_planes: usize,
    fill_empty_history: FillEmptyHistory,
) -> Vec<InputPlanes> {
    histories
        .par_iter()
        .map(|history| encode_position_for_nn(history, history_planes, fill_empty_history))
        .collect()
}

/// True if groups older than the first stored position should stay zero.
fn stops_before_history(fill: FillEmptyHistory, first: &Position) -> bool {
    match fill {
        FillEmptyHistory::No => true,
        // Compare the stored board: the view read for this group may be mirrored.
        FillEmptyHistory::FenOnly => *first.board() == Board::startpos(),
        FillEmptyHistory::Always => false,
    }
}

/// Fills planes 104..112 from the current position.
fn encode_aux_planes(planes: InputPlanes, current: &Position) -> InputPlanes {
    let board = current.board();
    let castlings = board.castlings();

    let rook_squares = |we_can: bool, they_can: bool, file: u8| -> Bitboard {
        let ours = if we_can { Square::A1.as_board() } else { Bitboard::EMPTY };
        let theirs = if they_can { Square::A8.as_board() } else { Bitboard::EMPTY };
        (ours | theirs) << file
    };
    let queenside = rook_squares(
        castlings.we_can_000(),
        castlings.they_can_000(),
        castlings.queenside_rook(),
    );
    let kingside = rook_squares(
        castlings.we_can_00(),
        castlings.they_can_00(),
        castlings.kingside_rook(),
    );

    let black_to_move = if board.flipped() {
        Plane::full(1.0)
    } else {
        Plane::empty()
    };

    planes
        .with_plane(AuxPlane::QueensideRooks.index(), Plane::from_bits(queenside, 1.0))
        .with_plane(AuxPlane::KingsideRooks.index(), Plane::from_bits(kingside, 1.0))
        .with_plane(AuxPlane::BlackToMove.index(), black_to_move)
        .with_plane(
            AuxPlane::NoProgress.index(),
            Plane::full(current.no_progress_ply() as f32),
        )
        .with_plane(AuxPlane::Edges.index(), Plane::full(1.0))
}

/// The 13 planes of one history group.
fn history_group(board: &Board, repetitions: u32) -> [Plane; PLANES_PER_BOARD] {
    let mut group = [Plane::empty(); PLANES_PER_BOARD];
    for piece in ALL_PIECE_TYPES {
        let of_type = board.pieces(piece);
        group[HistorySlot::ours(piece).offset()] = Plane::from_bits(board.ours() & of_type, 1.0);
        group[HistorySlot::theirs(piece).offset()] =
            Plane::from_bits(board.theirs() & of_type, 1.0);
    }
    if repetitions >= 1 {
        group[HistorySlot::Repetition.offset()] = Plane::full(1.0);
    }
    group
}

/// Takes back the double pawn push implied by the board's en-passant square.
///
/// A stand-in for a ply before the stored history cannot itself have just
/// been reached by that push, so the pawn goes back to its starting rank.
/// A landing square on rank 3 means our pawn went 2 -> 4; on rank 6 their
/// pawn went 7 -> 5.
fn undo_double_push(
    mut group: [Plane; PLANES_PER_BOARD],
    board: &Board,
) -> [Plane; PLANES_PER_BOARD] {
    let Some(target) = board.en_passant().lowest() else {
        return group;
    };
    let (slot, pushed_rank, origin_rank) = if target.rank() < 4 {
        (HistorySlot::OurPawns, 3, 1)
    } else {
        (HistorySlot::TheirPawns, 4, 6)
    };
    let (Some(pushed), Some(origin)) = (
        Square::new(target.file(), pushed_rank),
        Square::new(target.file(), origin_rank),
    ) else {
        return group;
    };

    let pawns = group[slot.offset()];
    if !pawns.mask().contains(pushed) {
        return group;
    }
    group[slot.offset()] =
        Plane::from_bits(pawns.mask().without(pushed).with(origin), pawns.value());
    group
}
