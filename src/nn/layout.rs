//! Network input layout: where every plane lives in the 112-plane tensor.
//!
//! The layout is fixed by the trained network. Planes 0..104 are eight
//! 13-plane history groups, most recent ply first; planes 104..112 are the
//! auxiliary planes. All offsets are derived from the two role enums below.

use crate::board::PieceType;

/// Number of past plies the network sees.
pub const MOVE_HISTORY: usize = 8;

/// Planes per history group.
pub const PLANES_PER_BOARD: usize = 13;

/// Index of the first auxiliary plane.
pub const AUX_PLANE_BASE: usize = PLANES_PER_BOARD * MOVE_HISTORY;

/// Number of auxiliary planes.
pub const AUX_PLANES: usize = 8;

/// Total planes in one encoded position.
pub const INPUT_PLANES: usize = AUX_PLANE_BASE + AUX_PLANES;

/// Squares per plane.
pub const SQUARES: usize = 64;

/// Role of a plane inside a history group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistorySlot {
    OurPawns,
    OurKnights,
    OurBishops,
    OurRooks,
    OurQueens,
    OurKings,
    TheirPawns,
    TheirKnights,
    TheirBishops,
    TheirRooks,
    TheirQueens,
    TheirKings,
    Repetition,
}

/// All history slots in layout order.
pub const ALL_HISTORY_SLOTS: [HistorySlot; PLANES_PER_BOARD] = [
    HistorySlot::OurPawns,
    HistorySlot::OurKnights,
    HistorySlot::OurBishops,
    HistorySlot::OurRooks,
    HistorySlot::OurQueens,
    HistorySlot::OurKings,
    HistorySlot::TheirPawns,
    HistorySlot::TheirKnights,
    HistorySlot::TheirBishops,
    HistorySlot::TheirRooks,
    HistorySlot::TheirQueens,
    HistorySlot::TheirKings,
    HistorySlot::Repetition,
];

impl HistorySlot {
    /// Slot holding the side to move's pieces of this type.
    pub const fn ours(piece: PieceType) -> HistorySlot {
        match piece {
            PieceType::Pawn => HistorySlot::OurPawns,
            PieceType::Knight => HistorySlot::OurKnights,
            PieceType::Bishop => HistorySlot::OurBishops,
            PieceType::Rook => HistorySlot::OurRooks,
            PieceType::Queen => HistorySlot::OurQueens,
            PieceType::King => HistorySlot::OurKings,
        }
    }

    /// Slot holding the opponent's pieces of this type.
    pub const fn theirs(piece: PieceType) -> HistorySlot {
        match piece {
            PieceType::Pawn => HistorySlot::TheirPawns,
            PieceType::Knight => HistorySlot::TheirKnights,
            PieceType::Bishop => HistorySlot::TheirBishops,
            PieceType::Rook => HistorySlot::TheirRooks,
            PieceType::Queen => HistorySlot::TheirQueens,
            PieceType::King => HistorySlot::TheirKings,
        }
    }

    /// Offset within a group.
    #[inline]
    pub const fn offset(self) -> usize {
        self as usize
    }

    /// Absolute plane index for this slot in history group `group`.
    #[inline]
    pub const fn plane(self, group: usize) -> usize {
        group * PLANES_PER_BOARD + self.offset()
    }
}

/// Role of an auxiliary plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxPlane {
    /// Rooks (either side) still able to castle queenside.
    QueensideRooks,
    /// Rooks (either side) still able to castle kingside.
    KingsideRooks,
    /// Always zero.
    Reserved0,
    /// Always zero.
    Reserved1,
    /// All ones when black is to move.
    BlackToMove,
    /// Broadcast no-progress ply count.
    NoProgress,
    /// Formerly the move counter; always zero.
    RetiredMoveCount,
    /// All ones, marks the board edges against padding.
    Edges,
}

/// All auxiliary planes in layout order.
pub const ALL_AUX_PLANES: [AuxPlane; AUX_PLANES] = [
    AuxPlane::QueensideRooks,
    AuxPlane::KingsideRooks,
    AuxPlane::Reserved0,
    AuxPlane::Reserved1,
    AuxPlane::BlackToMove,
    AuxPlane::NoProgress,
    AuxPlane::RetiredMoveCount,
    AuxPlane::Edges,
];

impl AuxPlane {
    /// Absolute plane index.
    #[inline]
    pub const fn index(self) -> usize {
        AUX_PLANE_BASE + self as usize
    }
}
