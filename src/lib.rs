//! Core library for Game of Life variants on square and hex grids.

pub mod board;
pub mod enc;
pub mod engine;
pub mod rule;

pub use board::Board;
pub use enc::{BoardCodec, FormatError, PlainText};
pub use engine::Automaton;
pub use rule::Topology;
