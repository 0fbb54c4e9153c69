use crate::square::Square;
use thiserror::Error;

/// Errors raised while loading or mutating a board from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square index {0} is outside 0..64")]
    SquareOutOfRange(u8),

    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("invalid move `{0}`")]
    InvalidMove(String),

    #[error("placement has {0} ranks, expected 8")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files, expected 8")]
    RankWidth { rank: u8, files: u8 },

    #[error("invalid piece glyph `{0}`")]
    InvalidGlyph(char),

    #[error("invalid side to move `{0}`")]
    InvalidSide(String),

    #[error("empty placement text")]
    EmptyPlacement,

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("piece on {0} does not belong to the side to move")]
    WrongSide(Square),

    #[error("destination {0} holds a piece of the side to move")]
    OwnPieceOnTarget(Square),

    #[error("bitboard `{0}` overlaps with another piece")]
    Overlap(&'static str),

    #[error("cached occupancy is out of sync with the piece bitboards")]
    StaleOccupancy,
}
