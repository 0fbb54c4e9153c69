use super::glyphs::char_for;
use super::Board;
use crate::square::Square;

const EMPTY_GLYPH: &str = " . ";

impl Board {
    /// Text grid of the board, one line per rank.
    ///
    /// Lines run from the group of indices 56..=63 down to 0..=7. Inside a
    /// line squares appear in descending index order, so with the h1 = 0
    /// layout the a-file is leftmost. Every line, the last included, ends
    /// in `'\n'`. Each square is three characters: `" . "` when empty,
    /// otherwise the piece letter padded with one space on each side.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 * EMPTY_GLYPH.len() + 8);

        for rank in (0..8u8).rev() {
            for idx in (rank * 8..rank * 8 + 8).rev() {
                match self.piece_at(Square::from_index(idx)) {
                    Some((color, piece)) => {
                        out.push(' ');
                        out.push(char_for(piece, color));
                        out.push(' ');
                    }
                    None => out.push_str(EMPTY_GLYPH),
                }
            }
            out.push('\n');
        }
        out
    }
}
