//! Chess board seen from the side to move.
//!
//! The board always stores "our" pieces as the side to move, with our home
//! rank on rank 1. When black is to move the global board is mirrored
//! vertically and `flipped` is set. The other side's view is produced by
//! [`Board::mirrored`], never by mutating a board in place.

use super::bitboard::Bitboard;
use super::castling::Castlings;
use super::square::Square;

/// The six piece kinds, in network plane order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// All piece types in plane order.
pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

impl PieceType {
    /// Returns the lowercase FEN letter.
    pub const fn fen_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parses a FEN letter of either case.
    pub fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// Board position from the perspective of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    ours: Bitboard,
    theirs: Bitboard,
    pieces: [Bitboard; 6],
    castlings: Castlings,
    en_passant: Bitboard,
    flipped: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// An empty board with no castling rights, white to move.
    pub const fn empty() -> Self {
        Board {
            ours: Bitboard::EMPTY,
            theirs: Bitboard::EMPTY,
            pieces: [Bitboard::EMPTY; 6],
            castlings: Castlings::none(),
            en_passant: Bitboard::EMPTY,
            flipped: false,
        }
    }

    /// The standard starting position, white to move.
    pub const fn startpos() -> Self {
        Board {
            ours: Bitboard::new(0x0000_0000_0000_FFFF),
            theirs: Bitboard::new(0xFFFF_0000_0000_0000),
            pieces: [
                Bitboard::new(0x00FF_0000_0000_FF00),
                Bitboard::new(0x4200_0000_0000_0042),
                Bitboard::new(0x2400_0000_0000_0024),
                Bitboard::new(0x8100_0000_0000_0081),
                Bitboard::new(0x0800_0000_0000_0008),
                Bitboard::new(0x1000_0000_0000_0010),
            ],
            castlings: Castlings::all(),
            en_passant: Bitboard::EMPTY,
            flipped: false,
        }
    }

    /// Puts a piece on an empty square. Returns false if the square is
    /// already occupied.
    pub fn place(&mut self, ours: bool, piece: PieceType, sq: Square) -> bool {
        if (self.ours | self.theirs).contains(sq) {
            return false;
        }
        if ours {
            self.ours = self.ours.with(sq);
        } else {
            self.theirs = self.theirs.with(sq);
        }
        let slot = &mut self.pieces[piece as usize];
        *slot = slot.with(sq);
        true
    }

    pub fn set_castlings(&mut self, castlings: Castlings) {
        self.castlings = castlings;
    }

    /// Sets or clears the en-passant landing square.
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq.map_or(Bitboard::EMPTY, Square::as_board);
    }

    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }

    #[inline]
    pub const fn ours(&self) -> Bitboard {
        self.ours
    }

    #[inline]
    pub const fn theirs(&self) -> Bitboard {
        self.theirs
    }

    #[inline]
    pub const fn pieces(&self, piece: PieceType) -> Bitboard {
        self.pieces[piece as usize]
    }

    #[inline]
    pub const fn pawns(&self) -> Bitboard {
        self.pieces(PieceType::Pawn)
    }

    #[inline]
    pub const fn knights(&self) -> Bitboard {
        self.pieces(PieceType::Knight)
    }

    #[inline]
    pub const fn bishops(&self) -> Bitboard {
        self.pieces(PieceType::Bishop)
    }

    #[inline]
    pub const fn rooks(&self) -> Bitboard {
        self.pieces(PieceType::Rook)
    }

    #[inline]
    pub const fn queens(&self) -> Bitboard {
        self.pieces(PieceType::Queen)
    }

    #[inline]
    pub const fn kings(&self) -> Bitboard {
        self.pieces(PieceType::King)
    }

    #[inline]
    pub const fn castlings(&self) -> &Castlings {
        &self.castlings
    }

    /// Empty, or the single square a capturing pawn would land on.
    #[inline]
    pub const fn en_passant(&self) -> Bitboard {
        self.en_passant
    }

    /// True when black is to move and the stored coordinates are mirrored.
    #[inline]
    pub const fn flipped(&self) -> bool {
        self.flipped
    }

    /// Piece on a square and whether it is ours.
    pub fn piece_at(&self, sq: Square) -> Option<(bool, PieceType)> {
        let ours = if self.ours.contains(sq) {
            true
        } else if self.theirs.contains(sq) {
            false
        } else {
            return None;
        };
        self.pieces
            .iter()
            .position(|bb| bb.contains(sq))
            .map(|i| (ours, ALL_PIECE_TYPES[i]))
    }

    /// The board as the opponent sees it: sides swapped, ranks mirrored,
    /// castling rights swapped, `flipped` toggled.
    pub fn mirrored(&self) -> Board {
        Board {
            ours: self.theirs.mirrored(),
            theirs: self.ours.mirrored(),
            pieces: self.pieces.map(Bitboard::mirrored),
            castlings: self.castlings.mirrored(),
            en_passant: self.en_passant.mirrored(),
            flipped: !self.flipped,
        }
    }
}
