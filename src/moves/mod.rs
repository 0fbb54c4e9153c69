pub mod execute;
pub mod movegen;
pub mod perft;
pub mod types;
