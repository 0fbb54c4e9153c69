use crate::board::{Board, Piece};
use crate::error::BoardError;
use crate::moves::types::Move;
use tracing::trace;

/// Relocate the side-to-move's piece from `mv.from()` to `mv.to()` and pass
/// the turn.
///
/// Origin and destination must differ, and the destination may not hold a
/// piece of the mover's own color. An enemy piece standing on the
/// destination is removed and returned. Captures,
/// promotion, castling and en passant get no special treatment; the board
/// only tracks placement, so this is the whole state change. On error the
/// board is left untouched.
pub fn make_move(board: &mut Board, mv: Move) -> Result<Option<Piece>, BoardError> {
    let color = board.side_to_move();
    let from = mv.from();
    let to = mv.to();

    if from == to {
        return Err(BoardError::InvalidMove(mv.to_uci()));
    }

    let (owner, piece) = board.piece_at(from).ok_or(BoardError::EmptyOrigin(from))?;
    if owner != color {
        return Err(BoardError::WrongSide(from));
    }
    if board.occupancy(color) & to.bb() != 0 {
        return Err(BoardError::OwnPieceOnTarget(to));
    }

    let captured = board.remove_piece(to).map(|(_, p)| p);
    board.remove_piece(from);
    board.put_piece(color, piece, to);
    board.set_side_to_move(color.opposite());

    trace!(%mv, ?piece, ?captured, "make_move");
    debug_assert!(board.validate().is_ok());
    Ok(captured)
}

/// Apply a sequence of moves, stopping at the first one that fails.
pub fn play_moves<'a, I>(board: &mut Board, moves: I) -> Result<(), BoardError>
where
    I: IntoIterator<Item = &'a Move>,
{
    for &mv in moves {
        make_move(board, mv)?;
    }
    Ok(())
}
