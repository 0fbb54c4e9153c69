pub mod bitboard;
pub mod board;
pub mod context;
pub mod error;
#[cfg(feature = "cli")]
pub mod logger;
pub mod moves;
pub mod square;
pub mod utils;
