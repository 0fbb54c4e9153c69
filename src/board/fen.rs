// src/board/fen.rs
//
// Loader for the piece-placement and side-to-move fields of a FEN record.
// Castling, en passant and the move counters are outside what the board
// tracks; they are accepted and ignored on input and written as
// "- - 0 1" on output.

use super::glyphs::{char_for, piece_from_char};
use super::{Board, Color};
use crate::error::BoardError;
use crate::square::Square;

impl Board {
    /// Replace the whole board with the position described by `fen`.
    ///
    /// On error the board is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), BoardError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(BoardError::EmptyPlacement)?;

        let side = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(BoardError::InvalidSide(other.to_string())),
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::RankCount(ranks.len()));
        }

        let mut next = Board::new_empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file: u8 = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(BoardError::InvalidGlyph(c));
                    }
                    file += skip as u8;
                } else {
                    let (piece, color) = piece_from_char(c).ok_or(BoardError::InvalidGlyph(c))?;
                    let sq = Square::from_coords(file, rank).ok_or(BoardError::RankWidth {
                        rank: rank + 1,
                        files: file + 1,
                    })?;
                    next.put_piece(color, piece, sq);
                    file += 1;
                }
                if file > 8 {
                    return Err(BoardError::RankWidth {
                        rank: rank + 1,
                        files: file,
                    });
                }
            }
            if file != 8 {
                return Err(BoardError::RankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        next.side_to_move = side;
        *self = next;
        Ok(())
    }

    /// FEN text for the current placement and side to move.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0u8;
            for file in 0..8u8 {
                let Some(sq) = Square::from_coords(file, rank) else {
                    continue;
                };
                match self.piece_at(sq) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        fen.push(char_for(piece, color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push((b'0' + empty) as char);
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        fen.push_str(" - - 0 1");
        fen
    }
}
