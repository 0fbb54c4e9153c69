use crate::board::Board;
use crate::error::BoardError;
use crate::moves::execute::make_move;
use crate::moves::perft::{perft, perft_divide};
use crate::moves::types::Move;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Where a `position` request starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartingPoint {
    StartPos,
    Fen(String),
}

/// Split a tokenized `position` command (`parts[0] == "position"`) into its
/// starting point and the move tokens after `moves`.
///
/// Anything other than `fen` in the second slot means the start position.
/// `fen` with no fields yields an empty text, which the loader rejects.
pub fn parse_position<'a, 'b>(parts: &'a [&'b str]) -> (StartingPoint, &'a [&'b str]) {
    let moves_idx = parts.iter().position(|&p| p == "moves");
    let head_end = moves_idx.unwrap_or(parts.len());

    let start = match parts.get(1) {
        Some(&"fen") => StartingPoint::Fen(parts[2.min(head_end)..head_end].join(" ")),
        _ => StartingPoint::StartPos,
    };
    let moves: &[&str] = match moves_idx {
        Some(i) => &parts[i + 1..],
        None => &[],
    };
    (start, moves)
}

/// State owned by the command loop: the single live board and nothing else
/// global. Collaborators borrow it.
#[derive(Debug, Clone)]
pub struct EngineContext {
    board: Board,
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Back to the standard starting arrangement.
    pub fn new_game(&mut self) {
        self.board.set_to_start_pos();
        debug!("new game");
    }

    /// Rebuild the board from a starting point plus coordinate moves.
    ///
    /// The live board only changes if every step succeeds.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn set_position(&mut self, start: &StartingPoint, moves: &[&str]) -> Result<(), BoardError> {
        let mut board = match start {
            StartingPoint::StartPos => Board::new(),
            StartingPoint::Fen(fen) => Board::from_str(fen)?,
        };

        for text in moves {
            let mv = Move::from_str(text)?;
            make_move(&mut board, mv)?;
        }

        self.board = board;
        info!(fen = %self.board.to_fen(), "position set");
        Ok(())
    }

    /// Text grid of the live board.
    pub fn display(&self) -> String {
        self.board.render()
    }

    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn perft(&self, depth: u32) -> u64 {
        perft(&self.board, depth)
    }

    pub fn divide(&self, depth: u32) -> Vec<(Move, u64)> {
        perft_divide(&self.board, depth)
    }
}
