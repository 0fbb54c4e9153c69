mod fen;
mod glyphs;
mod render;

use crate::bitboard::{
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H, RANK_1, RANK_2, RANK_7,
    RANK_8,
};
use crate::error::BoardError;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Starting position constants, built from rank/file sets.
// ———————— White side (ranks 1 & 2) ————————
const WHITE_PAWN_MASK: u64 = RANK_2;
const WHITE_ROOK_MASK: u64 = RANK_1 & (FILE_A | FILE_H);
const WHITE_KNIGHT_MASK: u64 = RANK_1 & (FILE_B | FILE_G);
const WHITE_BISHOP_MASK: u64 = RANK_1 & (FILE_C | FILE_F);
const WHITE_QUEEN_MASK: u64 = RANK_1 & FILE_D;
const WHITE_KING_MASK: u64 = RANK_1 & FILE_E;

// ———————— Black side (ranks 7 & 8) ————————
const BLACK_PAWN_MASK: u64 = RANK_7;
const BLACK_ROOK_MASK: u64 = RANK_8 & (FILE_A | FILE_H);
const BLACK_KNIGHT_MASK: u64 = RANK_8 & (FILE_B | FILE_G);
const BLACK_BISHOP_MASK: u64 = RANK_8 & (FILE_C | FILE_F);
const BLACK_QUEEN_MASK: u64 = RANK_8 & FILE_D;
const BLACK_KING_MASK: u64 = RANK_8 & FILE_E;

/// Which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Piece enum to hold all types of pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];
}

/// Core board representation using bitboards.
///
/// The occupancy fields are caches of the piece bitboards. Every mutation
/// path in this crate keeps them in sync; [`Board::validate`] checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `[color][piece]`
    pub(crate) piece_bb: [[u64; 6]; 2],
    pub(crate) occ_white: u64,
    pub(crate) occ_black: u64,
    pub(crate) occ_all: u64,
    pub(crate) side_to_move: Color,
}

impl Board {
    #[inline(always)]
    pub(crate) fn bb(&self, color: Color, piece: Piece) -> u64 {
        self.piece_bb[color as usize][piece as usize]
    }

    /// Replace one piece bitboard and patch the occupancy caches.
    ///
    /// Callers must keep `new_bb` disjoint from the other eleven bitboards.
    #[inline(always)]
    pub(crate) fn set_bb(&mut self, color: Color, piece: Piece, new_bb: u64) {
        let ci = color as usize;
        let pi = piece as usize;

        let delta = self.piece_bb[ci][pi] ^ new_bb;
        if delta == 0 {
            return;
        }
        self.piece_bb[ci][pi] = new_bb;

        match color {
            Color::White => self.occ_white ^= delta,
            Color::Black => self.occ_black ^= delta,
        }
        self.occ_all = self.occ_white | self.occ_black;
    }

    /// Create an empty board (all bitboards zero, White to move).
    pub fn new_empty() -> Self {
        Board {
            piece_bb: [[0u64; 6]; 2],
            occ_white: 0,
            occ_black: 0,
            occ_all: 0,
            side_to_move: Color::White,
        }
    }

    /// Board in the standard starting arrangement.
    pub fn new() -> Self {
        let mut b = Board::new_empty();
        b.set_to_start_pos();
        b
    }

    /// Reset to the standard starting arrangement with White to move.
    pub fn set_to_start_pos(&mut self) {
        self.piece_bb = [
            [
                WHITE_PAWN_MASK,
                WHITE_KNIGHT_MASK,
                WHITE_BISHOP_MASK,
                WHITE_ROOK_MASK,
                WHITE_QUEEN_MASK,
                WHITE_KING_MASK,
            ],
            [
                BLACK_PAWN_MASK,
                BLACK_KNIGHT_MASK,
                BLACK_BISHOP_MASK,
                BLACK_ROOK_MASK,
                BLACK_QUEEN_MASK,
                BLACK_KING_MASK,
            ],
        ];
        self.side_to_move = Color::White;
        self.recompute_occupancy();
        debug!(occupied = self.occ_all, "board reset to start position");
    }

    /// Union of the six White bitboards, computed from scratch.
    pub fn compute_white(&self) -> u64 {
        self.piece_bb[Color::White as usize].iter().fold(0, |acc, bb| acc | bb)
    }

    /// Union of the six Black bitboards, computed from scratch.
    pub fn compute_black(&self) -> u64 {
        self.piece_bb[Color::Black as usize].iter().fold(0, |acc, bb| acc | bb)
    }

    /// Rebuild every occupancy cache from the piece bitboards.
    pub fn recompute_occupancy(&mut self) {
        self.occ_white = self.compute_white();
        self.occ_black = self.compute_black();
        self.occ_all = self.occ_white | self.occ_black;
    }

    #[inline(always)]
    /// Bitboard of all pieces (both colors).
    pub fn occupied(&self) -> u64 {
        self.occ_all
    }

    #[inline(always)]
    /// Bitboard of every empty square.
    pub fn unoccupied(&self) -> u64 {
        !self.occ_all
    }

    #[inline(always)]
    pub fn white_pieces(&self) -> u64 {
        self.occ_white
    }

    #[inline(always)]
    pub fn black_pieces(&self) -> u64 {
        self.occ_black
    }

    #[inline(always)]
    /// Bitboard of all pieces for one side.
    pub fn occupancy(&self, color: Color) -> u64 {
        match color {
            Color::White => self.occ_white,
            Color::Black => self.occ_black,
        }
    }

    #[inline(always)]
    /// Single‐slot accessor for a given piece & color.
    pub fn pieces(&self, piece: Piece, color: Color) -> u64 {
        self.bb(color, piece)
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Returns the piece and color at a given square, or None if empty.
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let mask = sq.bb();
        if self.occ_all & mask == 0 {
            return None;
        }
        let color = if self.occ_white & mask != 0 {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|&p| self.bb(color, p) & mask != 0)
            .map(|p| (color, p))
    }

    /// Place a piece, replacing whatever stood on the square.
    pub fn put_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        self.remove_piece(sq);
        let new_bb = self.bb(color, piece) | sq.bb();
        self.set_bb(color, piece, new_bb);
    }

    /// Clear a square, returning what stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let found = self.piece_at(sq);
        if let Some((color, piece)) = found {
            let new_bb = self.bb(color, piece) & !sq.bb();
            self.set_bb(color, piece, new_bb);
        }
        found
    }

    /// Validate that no square is occupied by more than one piece and that
    /// the occupancy caches match the piece bitboards.
    pub fn validate(&self) -> Result<(), BoardError> {
        const NAMES: [[&str; 6]; 2] = [
            [
                "white_pawns",
                "white_knights",
                "white_bishops",
                "white_rooks",
                "white_queens",
                "white_king",
            ],
            [
                "black_pawns",
                "black_knights",
                "black_bishops",
                "black_rooks",
                "black_queens",
                "black_king",
            ],
        ];

        let mut seen: u64 = 0;
        for color in Color::ALL {
            for piece in Piece::ALL {
                let bb = self.bb(color, piece);
                if seen & bb != 0 {
                    return Err(BoardError::Overlap(NAMES[color as usize][piece as usize]));
                }
                seen |= bb;
            }
        }

        let white = self.compute_white();
        let black = self.compute_black();
        if self.occ_white != white || self.occ_black != black || self.occ_all != (white | black) {
            return Err(BoardError::StaleOccupancy);
        }
        Ok(())
    }
}

/// An all-zero board (no pieces) with White to move.
impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new_empty();
        board.set_fen(s)?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
