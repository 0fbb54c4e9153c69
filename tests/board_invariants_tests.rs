use std::str::FromStr;

use pawnline::bitboard::{RANK_2, RANK_7};
use pawnline::board::{Board, Color, Piece};
use pawnline::moves::execute::make_move;
use pawnline::moves::movegen::pawn_moves;
use pawnline::moves::types::Move;
use pawnline::square::Square;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_invariants(b: &Board) {
    let mut seen = 0u64;
    for color in Color::ALL {
        for piece in Piece::ALL {
            let bb = b.pieces(piece, color);
            assert_eq!(seen & bb, 0, "{color:?} {piece:?} overlaps");
            seen |= bb;
        }
    }
    assert_eq!(b.occupied(), b.white_pieces() | b.black_pieces());
    assert_eq!(b.unoccupied(), !b.occupied());
    assert_eq!(b.white_pieces(), b.compute_white());
    assert_eq!(b.black_pieces(), b.compute_black());
    assert_eq!(b.occupied(), seen);
    assert!(b.validate().is_ok());
}

fn random_piece(rng: &mut StdRng) -> (Color, Piece) {
    let color = Color::ALL[rng.random_range(0..2)];
    let piece = Piece::ALL[rng.random_range(0..6)];
    (color, piece)
}

#[test]
fn start_position_sets() {
    let b = Board::new();
    assert_eq!(b.pieces(Piece::Pawn, Color::White), RANK_2);
    assert_eq!(b.pieces(Piece::Pawn, Color::White).count_ones(), 8);
    assert_eq!(b.pieces(Piece::Pawn, Color::Black), RANK_7);
    assert_eq!(b.side_to_move(), Color::White);
    assert_invariants(&b);
}

#[test]
fn random_placements_stay_disjoint() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let mut b = Board::new_empty();
        for _ in 0..rng.random_range(0..64) {
            let (color, piece) = random_piece(&mut rng);
            let sq = Square::from_index(rng.random_range(0..64));
            b.put_piece(color, piece, sq);
            assert_eq!(b.piece_at(sq), Some((color, piece)));
            assert_invariants(&b);
        }
        for _ in 0..rng.random_range(0..32) {
            let sq = Square::from_index(rng.random_range(0..64));
            b.remove_piece(sq);
            assert_eq!(b.piece_at(sq), None);
            assert_invariants(&b);
        }
    }
}

#[test]
fn random_relocations_stay_disjoint() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let mut b = Board::new_empty();
        for _ in 0..24 {
            let (color, piece) = random_piece(&mut rng);
            b.put_piece(color, piece, Square::from_index(rng.random_range(0..64)));
        }

        for _ in 0..50 {
            let from = Square::from_index(rng.random_range(0..64));
            let to = Square::from_index(rng.random_range(0..64));
            let mover = b.side_to_move();
            let count_before = b.occupied().count_ones();
            let target = b.piece_at(to);
            let before = b.clone();

            match make_move(&mut b, Move::new(from, to)) {
                Ok(captured) => {
                    assert_ne!(from, to, "null move accepted");
                    assert!(
                        target.is_none_or(|(owner, _)| owner != mover),
                        "captured own piece on {to}"
                    );
                    assert_eq!(captured, target.map(|(_, p)| p));
                    let expected = if target.is_some() { count_before - 1 } else { count_before };
                    assert_eq!(b.occupied().count_ones(), expected);
                }
                Err(_) => assert_eq!(b, before),
            }
            assert_invariants(&b);
        }
    }
}

#[test]
fn random_pawn_games_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let mut b = Board::new();
        for _ in 0..40 {
            let moves = pawn_moves(&b);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.random_range(0..moves.len())];
            assert!(b.piece_at(mv.to()).is_none(), "pushes land on empty squares");
            make_move(&mut b, mv).unwrap();
            assert_invariants(&b);
        }
    }
}

#[test]
fn fen_loaded_boards_satisfy_invariants() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        let b = Board::from_str(fen).unwrap();
        assert_invariants(&b);
        assert_eq!(Board::from_str(&b.to_fen()).unwrap(), b);
    }
}

#[test]
fn clone_is_an_independent_snapshot() {
    let mut b = Board::new();
    let snapshot = b.clone();
    let first = pawn_moves(&b)[0];
    make_move(&mut b, first).unwrap();
    assert_ne!(b, snapshot);
    b = snapshot.clone();
    assert_eq!(b, Board::new());
}
