//! Castling rights, relative to the side to move.

/// Castling availability for "we" (side to move) and "they", plus the files
/// the castling rooks start from.
///
/// Rook files default to a and h but can be anything under Chess960-style
/// setups. Both sides share the same files, as they do in every legal
/// starting array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castlings {
    we_can_000: bool,
    we_can_00: bool,
    they_can_000: bool,
    they_can_00: bool,
    queenside_rook: u8,
    kingside_rook: u8,
}

impl Default for Castlings {
    fn default() -> Self {
        Castlings::none()
    }
}

impl Castlings {
    /// No rights; rooks on the standard a and h files.
    pub const fn none() -> Self {
        Castlings {
            we_can_000: false,
            we_can_00: false,
            they_can_000: false,
            they_can_00: false,
            queenside_rook: 0,
            kingside_rook: 7,
        }
    }

    /// Every right, rooks on the standard a and h files.
    pub const fn all() -> Self {
        Castlings {
            we_can_000: true,
            we_can_00: true,
            they_can_000: true,
            they_can_00: true,
            queenside_rook: 0,
            kingside_rook: 7,
        }
    }

    /// Returns a copy with the given rook files. Files above 7 are masked
    /// onto the board.
    pub const fn with_rook_files(self, queenside: u8, kingside: u8) -> Self {
        Castlings {
            queenside_rook: queenside & 7,
            kingside_rook: kingside & 7,
            ..self
        }
    }

    /// Returns a copy with all four rights replaced.
    pub const fn with_rights(
        self,
        we_000: bool,
        we_00: bool,
        they_000: bool,
        they_00: bool,
    ) -> Self {
        Castlings {
            we_can_000: we_000,
            we_can_00: we_00,
            they_can_000: they_000,
            they_can_00: they_00,
            ..self
        }
    }

    #[inline]
    pub const fn we_can_000(&self) -> bool {
        self.we_can_000
    }

    #[inline]
    pub const fn we_can_00(&self) -> bool {
        self.we_can_00
    }

    #[inline]
    pub const fn they_can_000(&self) -> bool {
        self.they_can_000
    }

    #[inline]
    pub const fn they_can_00(&self) -> bool {
        self.they_can_00
    }

    #[inline]
    pub const fn queenside_rook(&self) -> u8 {
        self.queenside_rook
    }

    #[inline]
    pub const fn kingside_rook(&self) -> u8 {
        self.kingside_rook
    }

    pub const fn no_legal_castle(&self) -> bool {
        !(self.we_can_000 || self.we_can_00 || self.they_can_000 || self.they_can_00)
    }

    /// Rights as seen by the other side: we and they swap, files stay.
    pub const fn mirrored(self) -> Self {
        Castlings {
            we_can_000: self.they_can_000,
            we_can_00: self.they_can_00,
            they_can_000: self.we_can_000,
            they_can_00: self.we_can_00,
            ..self
        }
    }
}
