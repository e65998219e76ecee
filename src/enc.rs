use crate::board::{ALIVE, Board, DEAD};
use thiserror::Error;

/// Malformed board text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized cell {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },
}

pub trait BoardCodec {
    fn encode(&self, board: &Board) -> String;
    fn decode(&self, value: &str) -> Result<Board, FormatError>;
}

/// The plain-text board format: one line per row, [`ALIVE`] for a live cell
/// and [`DEAD`] for a dead one. Blank lines are ignored on decode; every
/// remaining row must match the first row's length.
#[derive(Debug, Default)]
pub struct PlainText;

impl BoardCodec for PlainText {
    fn encode(&self, board: &Board) -> String {
        let mut out = String::with_capacity(board.height() * (board.width() + 1));
        for row in 0..board.height() {
            for col in 0..board.width() {
                out.push(if board.get(row, col) { ALIVE } else { DEAD });
            }
            out.push('\n');
        }
        out
    }

    fn decode(&self, value: &str) -> Result<Board, FormatError> {
        let lines: Vec<&str> = value
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(FormatError::Empty);
        }

        let width = lines[0].chars().count();
        let mut board = Board::new(width, lines.len());
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(FormatError::RaggedRow {
                    row,
                    len,
                    expected: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    DEAD => {}
                    ALIVE => board.set(row, col, true),
                    _ => return Err(FormatError::UnknownCell { ch, row, col }),
                }
            }
        }
        Ok(board)
    }
}
