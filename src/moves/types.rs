use crate::error::BoardError;
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Upper bound on pseudo-legal moves in any position.
pub const MAX_MOVES: usize = 256;

/// Fixed-capacity move list for hot paths.
pub type MoveArray = ArrayVec<Move, MAX_MOVES>;

pub trait MoveBuffer: Deref<Target = [Move]> + DerefMut {
    fn push(&mut self, mv: Move);
    fn clear(&mut self);
}

impl MoveBuffer for Vec<Move> {
    fn push(&mut self, mv: Move) {
        self.push(mv);
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<const N: usize> MoveBuffer for ArrayVec<Move, N> {
    fn push(&mut self, mv: Move) {
        self.push(mv);
    }
    fn clear(&mut self) {
        self.clear();
    }
}

/// Origin and destination of a move. Nothing else is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline(always)]
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Build from raw indices. Panics if either is outside 0..64.
    #[inline(always)]
    pub(crate) fn from_indices(from: u8, to: u8) -> Self {
        Move {
            from: Square::from_index(from),
            to: Square::from_index(to),
        }
    }

    #[inline(always)]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline(always)]
    pub fn to(&self) -> Square {
        self.to
    }

    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Coordinate notation, e.g. `e2e4`. A trailing promotion letter is rejected.
impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(BoardError::InvalidMove(s.to_string()));
        }
        let from = Square::from_str(&s[..2]).map_err(|_| BoardError::InvalidMove(s.to_string()))?;
        let to = Square::from_str(&s[2..]).map_err(|_| BoardError::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_square_names() {
        let mv = Move::from_indices(11, 27);
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.to_uci(), "e2e4");
        assert_eq!(mv.from().index(), 11);
        assert_eq!(mv.to().index(), 27);
    }

    #[test]
    fn parse_coordinate_notation() {
        let mv = Move::from_str("g7g5").unwrap();
        assert_eq!(mv, Move::new(Square::from_str("g7").unwrap(), Square::from_str("g5").unwrap()));
        assert!(Move::from_str("e7e8q").is_err());
        assert!(Move::from_str("e9e4").is_err());
        assert!(Move::from_str("").is_err());
    }

    fn fill(buf: &mut impl MoveBuffer) {
        buf.clear();
        buf.push(Move::from_indices(8, 16));
        buf.push(Move::from_indices(9, 17));
    }

    #[test]
    fn move_buffers_share_behaviour() {
        let mut v: Vec<Move> = Vec::new();
        let mut a = MoveArray::new();
        fill(&mut v);
        fill(&mut a);
        assert_eq!(&v[..], &a[..]);
        MoveBuffer::clear(&mut a);
        assert!(a.is_empty());
    }
}
