use crate::board::Board;
use crate::moves::{
    execute::make_move,
    movegen::generate_pseudo_legal,
    types::{Move, MoveArray},
};
use tracing::{debug, instrument, warn};

const MAX_LOG_DEPTH: u32 = 3; // only trace details for shallow nodes

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftCounters {
    pub nodes: u64,
    pub single_pushes: u64,
    pub double_pushes: u64,
}

impl PerftCounters {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add(&mut self, o: &PerftCounters) {
        self.nodes += o.nodes;
        self.single_pushes += o.single_pushes;
        self.double_pushes += o.double_pushes;
    }
}

#[inline]
fn is_double_step(mv: Move) -> bool {
    mv.from().index().abs_diff(mv.to().index()) == 16
}

/// Child position after `mv`. Generated moves always have a side-to-move
/// piece on their origin and an empty destination, so a failure means the
/// generator is broken: debug builds panic, release builds skip the move.
#[inline]
fn child(board: &Board, mv: Move) -> Option<Board> {
    let mut next = board.clone();
    let applied = make_move(&mut next, mv);
    debug_assert!(applied.is_ok(), "generated move {mv} could not be applied");
    match applied {
        Ok(_) => Some(next),
        Err(err) => {
            warn!(%mv, %err, "perft: generated move could not be applied");
            None
        }
    }
}

fn perft_recursive(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveArray::new();
    generate_pseudo_legal(board, &mut moves);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .filter_map(|&mv| child(board, mv))
        .map(|next| perft_recursive(&next, depth - 1))
        .sum()
}

fn perft_count_recursive(board: &Board, depth: u32, out: &mut PerftCounters) {
    if depth == 0 {
        out.nodes += 1;
        return;
    }

    let mut moves = MoveArray::new();
    generate_pseudo_legal(board, &mut moves);

    for &mv in moves.iter() {
        // breakdown tags at this ply (edge-based)
        if is_double_step(mv) {
            out.double_pushes += 1;
        } else {
            out.single_pushes += 1;
        }

        if let Some(next) = child(board, mv) {
            perft_count_recursive(&next, depth - 1, out);
        }
    }
}

/// Leaf count of the move tree `depth` plies deep.
///
/// Every node is a fresh copy of its parent, so `board` is never mutated.
#[instrument(skip(board), fields(depth))]
pub fn perft(board: &Board, depth: u32) -> u64 {
    perft_recursive(board, depth)
}

/// Leaf count under each root move, in generation order.
#[instrument(skip(board), fields(depth))]
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(Move, u64)> {
    let mut rows = Vec::new();
    perft_divide_with(board, depth, |mv, count| rows.push((mv, count)));
    rows
}

/// Divide that reports each root move as soon as its subtree is counted.
/// Returns the number of rows passed to `on_row`.
pub fn perft_divide_with<F>(board: &Board, depth: u32, mut on_row: F) -> usize
where
    F: FnMut(Move, u64),
{
    let mut root = MoveArray::new();
    generate_pseudo_legal(board, &mut root);

    if depth <= MAX_LOG_DEPTH {
        debug!(depth, moves = root.len(), "divide: root moves");
    }
    if depth == 0 {
        return 0;
    }

    let mut total = 0;
    let mut rows = 0;
    for &mv in root.iter() {
        let Some(next) = child(board, mv) else {
            continue;
        };
        let count = perft_recursive(&next, depth - 1);

        if depth <= MAX_LOG_DEPTH {
            debug!(%mv, nodes = count, "divide: root child total");
        }
        total += count;
        rows += 1;
        on_row(mv, count);
    }

    debug!(depth, total, rows, "divide: total");
    rows
}

/// Perft with per-ply push breakdown.
pub fn perft_count_with_breakdown(board: &Board, depth: u32) -> PerftCounters {
    let mut out = PerftCounters::zero();
    perft_count_recursive(board, depth, &mut out);
    out
}

/// Divide with a breakdown per root move.
pub fn perft_divide_with_breakdown(board: &Board, depth: u32) -> Vec<(Move, PerftCounters)> {
    let mut root = MoveArray::new();
    generate_pseudo_legal(board, &mut root);

    let mut out = Vec::with_capacity(root.len());
    if depth == 0 {
        return out;
    }

    for &mv in root.iter() {
        let Some(next) = child(board, mv) else {
            continue;
        };
        let mut pc = PerftCounters::zero();
        if depth > 1 {
            perft_count_recursive(&next, depth - 1, &mut pc);
        } else {
            pc.nodes = 1;
        }
        out.push((mv, pc));
    }
    out
}
