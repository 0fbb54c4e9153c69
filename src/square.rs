use crate::error::BoardError;
use std::fmt;
use std::str::FromStr;

/// A board square, 0..=63.
///
/// Index layout is `rank * 8 + (7 - file)`: h1 = 0, a1 = 7, h8 = 56, a8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Panics on an index outside 0..64.
    #[inline(always)]
    pub fn from_index(idx: u8) -> Self {
        assert!(idx < 64, "square index out of range: {idx}");
        Square(idx)
    }

    /// `file` 0 = a-file, `rank` 0 = first rank.
    #[inline(always)]
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + (7 - file)))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn file(self) -> u8 {
        7 - (self.0 % 8)
    }

    #[inline(always)]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Single-bit mask for this square.
    #[inline(always)]
    pub fn bb(self) -> u64 {
        1u64 << self.0
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        if idx < 64 {
            Ok(Square(idx))
        } else {
            Err(BoardError::SquareOutOfRange(idx))
        }
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::from_coords(file, rank).ok_or_else(|| BoardError::InvalidSquare(s.to_string()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}
