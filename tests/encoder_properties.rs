//! Property tests for the plane encoder.
//!
//! Builds histories from FEN strings and from random boards and checks the
//! layout guarantees the network relies on.

use chessplanes::board::{
    Bitboard, Board, PieceType, Position, PositionHistory, Square, ALL_PIECE_TYPES,
};
use chessplanes::config::EncoderConfig;
use chessplanes::nn::{
    encode_batch, encode_position_for_nn, AuxPlane, FillEmptyHistory, HistorySlot, Plane,
    INPUT_PLANES, MOVE_HISTORY,
};
use chessplanes::protocol::parse_fen;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
const AFTER_E4_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

fn position(fen: &str) -> Position {
    parse_fen(fen).unwrap()
}

fn place_randomly(board: &mut Board, ours: bool, piece: PieceType, rng: &mut SmallRng) {
    loop {
        let index = rng.gen_range(0..64u8);
        if board.place(ours, piece, Square::from_index(index).unwrap()) {
            return;
        }
    }
}

/// A board with both kings and a handful of random pieces.
fn random_board(rng: &mut SmallRng) -> Board {
    let mut board = Board::empty();
    place_randomly(&mut board, true, PieceType::King, rng);
    place_randomly(&mut board, false, PieceType::King, rng);
    for _ in 0..rng.gen_range(0..24) {
        let piece = ALL_PIECE_TYPES[rng.gen_range(0..5)];
        let ours = rng.gen_bool(0.5);
        place_randomly(&mut board, ours, piece, rng);
    }
    board
}

fn random_history(rng: &mut SmallRng) -> PositionHistory {
    let mut history = PositionHistory::new(Position::new(random_board(rng), 0, 0, 0));
    for _ in 0..rng.gen_range(0..12) {
        let mut board = random_board(rng);
        board.set_flipped(!history.last().board().flipped());
        let no_progress = rng.gen_range(0..100);
        history.push_board(board, no_progress);
    }
    history
}

#[test]
fn encoding_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let history = random_history(&mut rng);
        for fill in [FillEmptyHistory::No, FillEmptyHistory::FenOnly, FillEmptyHistory::Always] {
            let a = encode_position_for_nn(&history, 8, fill);
            let b = encode_position_for_nn(&history, 8, fill);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn always_112_planes() {
    let mut rng = SmallRng::seed_from_u64(7);
    for history_planes in 0..=10 {
        let history = random_history(&mut rng);
        let planes = encode_position_for_nn(&history, history_planes, FillEmptyHistory::Always);
        assert_eq!(planes.len(), INPUT_PLANES);
        assert_eq!(planes.iter().count(), INPUT_PLANES);
        assert_eq!(planes.to_tensor().len(), INPUT_PLANES * 64);
    }
}

#[test]
fn groups_past_history_planes_are_zero() {
    let mut rng = SmallRng::seed_from_u64(11);
    for history_planes in 0..MOVE_HISTORY {
        let history = random_history(&mut rng);
        let planes = encode_position_for_nn(&history, history_planes, FillEmptyHistory::Always);
        for group in history_planes..MOVE_HISTORY {
            assert!(planes.group(group).iter().all(|p| *p == Plane::empty()));
        }
        // Pieces always exist in encoded groups: both kings are present.
        for group in 0..history_planes {
            assert!(!planes.history(group, HistorySlot::OurKings).is_zero());
            assert!(!planes.history(group, HistorySlot::TheirKings).is_zero());
        }
    }
}

#[test]
fn edge_plane_is_all_ones() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..20 {
        let history = random_history(&mut rng);
        let planes = encode_position_for_nn(&history, 8, FillEmptyHistory::FenOnly);
        let edges = planes.aux(AuxPlane::Edges);
        assert_eq!(edges.mask(), Bitboard::FULL);
        assert_eq!(edges.value(), 1.0);
        assert_eq!(planes[111], Plane::full(1.0));
    }
}

#[test]
fn repetition_flag_after_king_shuffle() {
    let plies = [
        "4k3/8/8/8/8/8/4K3/8 b - - 1 1",
        "8/4k3/8/8/8/8/4K3/8 w - - 2 2",
        "8/4k3/8/8/8/8/8/4K3 b - - 3 2",
        "4k3/8/8/8/8/8/8/4K3 w - - 4 3",
    ];
    let mut history = PositionHistory::new(position("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
    for fen in plies {
        let pos = position(fen);
        history.push_board(*pos.board(), pos.no_progress_ply());
    }
    assert_eq!(history.last().repetitions(), 1);

    let planes = encode_position_for_nn(&history, 8, FillEmptyHistory::No);
    assert_eq!(*planes.history(0, HistorySlot::Repetition), Plane::full(1.0));
    for group in 1..5 {
        assert!(planes.history(group, HistorySlot::Repetition).is_zero());
    }
    // Group 4 is the first occurrence and shows the same pieces.
    assert_eq!(planes.history(4, HistorySlot::OurKings), planes.history(0, HistorySlot::OurKings));
}

#[test]
fn perspective_alternates_over_three_plies() {
    let mut history = PositionHistory::startpos();
    history.push(position(AFTER_E4));
    history.push(position(AFTER_E4_E5));
    let planes = encode_position_for_nn(&history, 8, FillEmptyHistory::FenOnly);

    // Current ply, white to move, read directly.
    let current = *history.last().board();
    assert_eq!(planes.history(0, HistorySlot::OurPawns).mask(), current.ours() & current.pawns());
    assert!(planes.history(0, HistorySlot::TheirPawns).mask().contains(sq("e5")));

    // Previous ply was stored from black's side; it is read back from white's.
    let previous = history.position_at(1).them_board();
    assert_eq!(planes.history(1, HistorySlot::OurPawns).mask(), previous.ours() & previous.pawns());
    assert!(planes.history(1, HistorySlot::OurPawns).mask().contains(sq("e4")));
    assert_eq!(
        planes.history(1, HistorySlot::TheirPawns).mask(),
        Bitboard::new(0x00FF_0000_0000_0000)
    );

    // Two plies back is the start position, read directly again.
    assert_eq!(planes.history(2, HistorySlot::OurPawns).mask(), Bitboard::new(0xFF00));

    // FEN_ONLY stops at the start position.
    for group in 3..MOVE_HISTORY {
        assert!(planes.group(group).iter().all(|p| *p == Plane::empty()));
    }
}

#[test]
fn fill_policy_boundaries() {
    let single = PositionHistory::new(position("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1"));

    let none = encode_position_for_nn(&single, 8, FillEmptyHistory::No);
    assert!(!none.group(0).iter().all(Plane::is_zero));
    for group in 1..MOVE_HISTORY {
        assert!(none.group(group).iter().all(|p| *p == Plane::empty()));
    }

    let fen_only = encode_position_for_nn(&single, 8, FillEmptyHistory::FenOnly);
    let always = encode_position_for_nn(&single, 8, FillEmptyHistory::Always);
    assert_eq!(fen_only, always);
    for group in 1..MOVE_HISTORY {
        assert_eq!(fen_only.group(group), fen_only.group(0));
    }

    let start = PositionHistory::startpos();
    let none = encode_position_for_nn(&start, 8, FillEmptyHistory::No);
    assert_eq!(none.group(0), encode_position_for_nn(&start, 1, FillEmptyHistory::No).group(0));
    for group in 1..MOVE_HISTORY {
        assert!(none.group(group).iter().all(|p| *p == Plane::empty()));
    }
    let fen_only = encode_position_for_nn(&start, 8, FillEmptyHistory::FenOnly);
    let always = encode_position_for_nn(&start, 8, FillEmptyHistory::Always);
    assert!(fen_only.group(1).iter().all(|p| *p == Plane::empty()));
    assert_eq!(always.group(1), always.group(0));
}

#[test]
fn queenside_only_castling() {
    let history = PositionHistory::new(position("r3k2r/8/8/8/8/8/8/R3K2R w Qq - 0 1"));
    let planes = encode_position_for_nn(&history, 1, FillEmptyHistory::No);
    assert_eq!(
        planes.aux(AuxPlane::QueensideRooks).mask(),
        sq("a1").as_board() | sq("a8").as_board()
    );
    assert!(planes.aux(AuxPlane::KingsideRooks).mask().is_empty());
}

#[test]
fn en_passant_pawn_is_moved_back_in_stand_in() {
    let history = PositionHistory::new(position(AFTER_E4));
    let planes = encode_position_for_nn(&history, 2, FillEmptyHistory::Always);

    // Black to move: white pawns are theirs and sit on rank 7 after mirroring.
    assert!(planes.history(0, HistorySlot::TheirPawns).mask().contains(sq("e5")));
    assert_eq!(
        planes.history(1, HistorySlot::TheirPawns).mask(),
        Bitboard::new(0x00FF_0000_0000_0000)
    );
    assert_eq!(planes.history(1, HistorySlot::OurPawns), planes.history(0, HistorySlot::OurPawns));
}

#[test]
fn batch_and_config_agree_with_single_encode() {
    let mut rng = SmallRng::seed_from_u64(99);
    let histories: Vec<PositionHistory> = (0..16).map(|_| random_history(&mut rng)).collect();
    let config = EncoderConfig {
        history_planes: 6,
        fill_empty_history: FillEmptyHistory::Always,
    };
    let batch = encode_batch(&histories, 6, FillEmptyHistory::Always);
    assert_eq!(batch, config.encode_batch(&histories));
    for (history, planes) in histories.iter().zip(&batch) {
        assert_eq!(*planes, config.encode(history));
    }
}
