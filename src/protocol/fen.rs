//! FEN encoding and decoding.
//!
//! FEN describes a position from white's point of view. Boards in this crate
//! are stored from the side to move's point of view, so a black-to-move FEN
//! is mirrored on the way in and mirrored back on the way out.
//!
//! Format: `<placement> <side> <castling> <en passant> [<halfmove> [<fullmove>]]`
//!
//! Castling accepts the standard `KQkq` letters as well as X-FEN/Shredder
//! rook-file letters (`A`-`H`, `a`-`h`) for non-standard rook placements.

use crate::board::{Board, Castlings, PieceType, Position, Square};

/// FEN of the standard starting position.
pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors that can occur during FEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("expected 4 to 6 space-separated fields, got {0}")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank '{0}' does not describe exactly 8 squares")]
    BadRankLength(String),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move: '{0}'")]
    InvalidSide(String),

    #[error("invalid castling character: '{0}'")]
    InvalidCastling(char),

    #[error("castling right '{0}' has no king on its home rank")]
    CastlingWithoutKing(char),

    #[error("invalid en passant square: '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid halfmove clock: '{0}'")]
    InvalidHalfmove(String),

    #[error("invalid fullmove number: '{0}'")]
    InvalidFullmove(String),
}

/// Parses the placement section into a white-to-move board.
fn parse_placement(s: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPiece(c));
                }
                file += skip as u8;
                if file > 8 {
                    return Err(FenError::BadRankLength(rank_str.to_string()));
                }
                continue;
            }
            let piece = PieceType::from_fen_char(c).ok_or(FenError::InvalidPiece(c))?;
            let sq = Square::new(file, rank)
                .ok_or_else(|| FenError::BadRankLength(rank_str.to_string()))?;
            board.place(c.is_ascii_uppercase(), piece, sq);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength(rank_str.to_string()));
        }
    }
    Ok(board)
}

/// Parses the castling section against a white-to-move board.
fn parse_castling(s: &str, board: &Board) -> Result<Castlings, FenError> {
    let mut castlings = Castlings::none();
    if s == "-" {
        return Ok(castlings);
    }

    let (mut we_000, mut we_00, mut they_000, mut they_00) = (false, false, false, false);
    let (mut queenside_file, mut kingside_file) =
        (castlings.queenside_rook(), castlings.kingside_rook());

    for c in s.chars() {
        let white = c.is_ascii_uppercase();
        let (side, home_rank) = if white {
            (board.ours(), 0u8)
        } else {
            (board.theirs(), 7u8)
        };
        let king_file = (side & board.kings())
            .iter()
            .find(|sq| sq.rank() == home_rank)
            .map(Square::file)
            .ok_or(FenError::CastlingWithoutKing(c))?;
        let home_rooks: Vec<u8> = (side & board.rooks())
            .iter()
            .filter(|sq| sq.rank() == home_rank)
            .map(Square::file)
            .collect();

        let (kingside, file) = match c.to_ascii_lowercase() {
            // Outermost rook on that wing, standard file if none is there.
            'k' => (
                true,
                home_rooks.iter().copied().filter(|&f| f > king_file).max().unwrap_or(7),
            ),
            'q' => (
                false,
                home_rooks.iter().copied().filter(|&f| f < king_file).min().unwrap_or(0),
            ),
            f @ 'a'..='h' => {
                let file = f as u8 - b'a';
                (file > king_file, file)
            }
            _ => return Err(FenError::InvalidCastling(c)),
        };

        match (white, kingside) {
            (true, true) => we_00 = true,
            (true, false) => we_000 = true,
            (false, true) => they_00 = true,
            (false, false) => they_000 = true,
        }
        if kingside {
            kingside_file = file;
        } else {
            queenside_file = file;
        }
    }

    castlings = castlings
        .with_rights(we_000, we_00, they_000, they_00)
        .with_rook_files(queenside_file, kingside_file);
    Ok(castlings)
}

/// Parses the en passant section against a white-to-move board. The square
/// must sit behind a pawn that the side not to move has just pushed two
/// squares, with that pawn's starting square now empty.
fn parse_en_passant(
    s: &str,
    board: &Board,
    black_to_move: bool,
) -> Result<Option<Square>, FenError> {
    if s == "-" {
        return Ok(None);
    }
    let (pusher, landing_rank, pushed_rank, origin_rank) = if black_to_move {
        (board.ours(), 2, 3, 1)
    } else {
        (board.theirs(), 5, 4, 6)
    };
    let invalid = || FenError::InvalidEnPassant(s.to_string());

    let sq = Square::from_algebraic(s)
        .filter(|sq| sq.rank() == landing_rank)
        .ok_or_else(invalid)?;
    let pushed = Square::new(sq.file(), pushed_rank).ok_or_else(invalid)?;
    let origin = Square::new(sq.file(), origin_rank).ok_or_else(invalid)?;
    let occupied = board.ours() | board.theirs();
    if !(pusher & board.pawns()).contains(pushed) || occupied.contains(origin) {
        return Err(invalid());
    }
    Ok(Some(sq))
}

/// Parses a FEN string into a position with no prior repetitions.
///
/// The half-move and full-move fields are optional and default to 0 and 1.
pub fn parse_fen(s: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(FenError::WrongFieldCount(fields.len()));
    }

    let mut board = parse_placement(fields[0])?;

    let black_to_move = match fields[1] {
        "w" => false,
        "b" => true,
        other => return Err(FenError::InvalidSide(other.to_string())),
    };

    let castlings = parse_castling(fields[2], &board)?;
    board.set_castlings(castlings);
    board.set_en_passant(parse_en_passant(fields[3], &board, black_to_move)?);

    let no_progress_ply = match fields.get(4) {
        Some(h) => h
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmove(h.to_string()))?,
        None => 0,
    };
    let fullmove = match fields.get(5) {
        Some(f) => f
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmove(f.to_string()))?,
        None => 1,
    };
    let game_ply = fullmove
        .max(1)
        .checked_mul(2)
        .map(|ply| ply - 2 + u32::from(black_to_move))
        .ok_or_else(|| FenError::InvalidFullmove(fields.get(5).unwrap_or(&"").to_string()))?;

    if black_to_move {
        board = board.mirrored();
    }
    Ok(Position::new(board, 0, no_progress_ply, game_ply))
}

/// Encodes the castling section for a white-to-move board.
fn encode_castling(castlings: &Castlings) -> String {
    if castlings.no_legal_castle() {
        return "-".to_string();
    }
    let standard = castlings.queenside_rook() == 0 && castlings.kingside_rook() == 7;
    let file_char = |file: u8| (b'a' + file) as char;

    let mut out = String::with_capacity(4);
    let rights = [
        (castlings.we_can_00(), 'K', file_char(castlings.kingside_rook()).to_ascii_uppercase()),
        (castlings.we_can_000(), 'Q', file_char(castlings.queenside_rook()).to_ascii_uppercase()),
        (castlings.they_can_00(), 'k', file_char(castlings.kingside_rook())),
        (castlings.they_can_000(), 'q', file_char(castlings.queenside_rook())),
    ];
    for (allowed, letter, file_letter) in rights {
        if allowed {
            out.push(if standard { letter } else { file_letter });
        }
    }
    out
}

/// Encodes a position into a FEN string.
///
/// Repetition counts are not part of FEN and are dropped.
pub fn encode_fen(position: &Position) -> String {
    let black_to_move = position.is_black_to_move();
    let board = if black_to_move {
        position.them_board()
    } else {
        *position.board()
    };

    let mut result = String::with_capacity(90);
    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for file in 0..8u8 {
            let piece = Square::new(file, rank).and_then(|sq| board.piece_at(sq));
            match piece {
                Some((white, pt)) => {
                    if empty > 0 {
                        result.push_str(&empty.to_string());
                        empty = 0;
                    }
                    let c = pt.fen_char();
                    result.push(if white { c.to_ascii_uppercase() } else { c });
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            result.push_str(&empty.to_string());
        }
        if rank > 0 {
            result.push('/');
        }
    }

    let en_passant = board
        .en_passant()
        .lowest()
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());

    result.push_str(&format!(
        " {} {} {} {} {}",
        if black_to_move { 'b' } else { 'w' },
        encode_castling(board.castlings()),
        en_passant,
        position.no_progress_ply(),
        position.game_ply() / 2 + 1,
    ));
    result
}
