use crate::bitboard::{BitboardExt, RANK_2, RANK_7};
use crate::board::{Board, Color, Piece};
use crate::moves::types::{Move, MoveBuffer};

/// Home rank of each side's pawns, the only rank allowed a double push.
#[inline(always)]
fn pawn_home_rank(color: Color) -> u64 {
    match color {
        Color::White => RANK_2,
        Color::Black => RANK_7,
    }
}

/// Shift a bitboard `steps` ranks forward from `color`'s point of view.
/// Bits pushed past the edge of the board are dropped.
#[inline(always)]
pub fn shift_forward(bb: u64, color: Color, steps: u32) -> u64 {
    match color {
        Color::White => bb << (8 * steps),
        Color::Black => bb >> (8 * steps),
    }
}

/// Destinations reached by moving every piece in `bb` `steps` ranks forward
/// onto an empty square.
#[inline(always)]
pub fn push_targets(bb: u64, color: Color, steps: u32, empty: u64) -> u64 {
    shift_forward(bb, color, steps) & empty
}

/// Origin square of a forward move of `steps` ranks landing on `to`.
#[inline(always)]
fn origin_of(to: u8, color: Color, steps: u8) -> u8 {
    match color {
        Color::White => to - 8 * steps,
        Color::Black => to + 8 * steps,
    }
}

#[inline(always)]
fn push_forward_moves(targets: u64, color: Color, steps: u8, move_list: &mut impl MoveBuffer) {
    for to in targets.squares() {
        let from = origin_of(to, color, steps);
        debug_assert!(from < 64 && to < 64);
        move_list.push(Move::from_indices(from, to));
    }
}

/// Double-push destinations for `color`'s pawns.
///
/// The step-over square must be empty as well as the destination.
#[cfg(not(feature = "legacy_double_push"))]
#[inline(always)]
fn double_push_targets(pawns: u64, color: Color, empty: u64) -> u64 {
    let home = pawns & pawn_home_rank(color);
    push_targets(push_targets(home, color, 1, empty), color, 1, empty)
}

/// Double-push destinations for `color`'s pawns.
///
/// Legacy rule: only the destination is checked, so a pawn can jump a piece
/// standing directly in front of it.
#[cfg(feature = "legacy_double_push")]
#[inline(always)]
fn double_push_targets(pawns: u64, color: Color, empty: u64) -> u64 {
    push_targets(pawns & pawn_home_rank(color), color, 2, empty)
}

/// Pawn pushes for `color`: all single pushes, then all double pushes, each
/// group in ascending destination order. No captures, promotions or en
/// passant.
pub fn generate_pawn_moves(board: &Board, color: Color, move_list: &mut impl MoveBuffer) {
    let pawns = board.pieces(Piece::Pawn, color);
    let empty = board.unoccupied();

    // ===== 1) Single pushes =====
    let single_pushes = push_targets(pawns, color, 1, empty);
    push_forward_moves(single_pushes, color, 1, move_list);

    // ===== 2) Double pushes from the home rank =====
    let double_pushes = double_push_targets(pawns, color, empty);
    push_forward_moves(double_pushes, color, 2, move_list);
}

/// Fresh list of White pawn pushes.
pub fn white_pawn_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    generate_pawn_moves(board, Color::White, &mut moves);
    moves
}

/// Fresh list of Black pawn pushes.
pub fn black_pawn_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    generate_pawn_moves(board, Color::Black, &mut moves);
    moves
}

/// Fresh list of pawn pushes for the side to move.
pub fn pawn_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    generate_pawn_moves(board, board.side_to_move(), &mut moves);
    moves
}

/// Every move the implemented generators produce for the side to move.
/// Pawn pushes are the only piece class generated.
pub fn generate_pseudo_legal(board: &Board, moves: &mut impl MoveBuffer) {
    moves.clear();
    generate_pawn_moves(board, board.side_to_move(), moves);
}
