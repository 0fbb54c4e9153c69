#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pawnline::board::Board;
    use pawnline::moves::movegen::pawn_moves;
    use pawnline::moves::perft::{
        perft, perft_count_with_breakdown, perft_divide, perft_divide_with,
        perft_divide_with_breakdown,
    };

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    fn run_startpos_depth(depth: u32, expected_nodes: u64) {
        let board = Board::from_str(START_FEN).expect("valid startpos");
        let nodes = perft(&board, depth);
        assert_eq!(
            nodes, expected_nodes,
            "Perft mismatch at depth {depth}: got {nodes}, expected {expected_nodes}"
        );
        assert_eq!(board, Board::new(), "perft must not mutate its input");
    }

    // Pawn pushes only; every other piece is a static blocker.
    #[test]
    fn perft_startpos_d0() {
        run_startpos_depth(0, 1);
    }
    #[test]
    fn perft_startpos_d1() {
        run_startpos_depth(1, 16);
    }
    #[test]
    fn perft_startpos_d2() {
        run_startpos_depth(2, 256);
    }
    #[test]
    fn perft_startpos_d3() {
        run_startpos_depth(3, 3_832);
    }
    #[test]
    fn perft_startpos_d4() {
        run_startpos_depth(4, 57_128);
    }

    #[test]
    fn divide_follows_generation_order() {
        let board = Board::new();
        let rows = perft_divide(&board, 3);
        let root: Vec<_> = rows.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(root, pawn_moves(&board));
        assert_eq!(rows.iter().map(|(_, n)| n).sum::<u64>(), perft(&board, 3));
    }

    #[test]
    fn divide_callback_matches_divide() {
        let board = Board::new();
        let mut seen = Vec::new();
        let roots = perft_divide_with(&board, 2, |mv, n| seen.push((mv, n)));
        assert_eq!(roots, 16);
        assert_eq!(roots, seen.len());
        assert_eq!(seen, perft_divide(&board, 2));
        assert!(seen.iter().all(|&(_, n)| n == 16));
    }

    #[test]
    fn divide_callback_count_matches_rows_emitted() {
        let mut calls = 0;
        let blocked = Board::from_str("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1").unwrap();
        assert_eq!(perft_divide_with(&blocked, 2, |_, _| calls += 1), 0);
        assert_eq!(perft_divide_with(&Board::new(), 0, |_, _| calls += 1), 0);
        assert_eq!(calls, 0);

        let one_pawn = Board::from_str("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let mut rows = Vec::new();
        let n = perft_divide_with(&one_pawn, 1, |mv, c| rows.push((mv.to_string(), c)));
        assert_eq!(n, rows.len());
        assert_eq!(rows, vec![("e2e3".to_string(), 1), ("e2e4".to_string(), 1)]);
    }

    #[test]
    fn divide_depth_zero_is_empty() {
        assert!(perft_divide(&Board::new(), 0).is_empty());
    }

    #[test]
    fn breakdown_counts_push_kinds() {
        let board = Board::new();
        let pc = perft_count_with_breakdown(&board, 1);
        assert_eq!(pc.nodes, 16);
        assert_eq!(pc.single_pushes, 8);
        assert_eq!(pc.double_pushes, 8);

        let pc = perft_count_with_breakdown(&board, 2);
        assert_eq!(pc.nodes, 256);
        assert_eq!(pc.single_pushes, 8 + 16 * 8);
        assert_eq!(pc.double_pushes, 8 + 16 * 8);
    }

    #[test]
    fn divide_breakdown_sums_to_perft() {
        let board = Board::new();
        let rows = perft_divide_with_breakdown(&board, 3);
        let mut total = pawnline::moves::perft::PerftCounters::zero();
        for (_, pc) in &rows {
            total.add(pc);
        }
        assert_eq!(rows.len(), 16);
        assert_eq!(total.nodes, 3_832);
    }

    #[test]
    fn blocked_position_has_no_children() {
        let board = Board::from_str("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1").unwrap();
        assert_eq!(perft(&board, 1), 0);
        assert_eq!(perft(&board, 3), 0);
    }
}
