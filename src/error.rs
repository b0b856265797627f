//! Error types for board operations and the protocol layer

use std::io;

use thiserror::Error;

use crate::board::Pos;

/// Failure of a board operation.
///
/// Every failing operation leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board size {0}")]
    InvalidSize(i64),
    #[error("move ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },
    #[error("invalid player id {0}")]
    InvalidPlayer(i64),
    #[error("cell ({}, {}) is already occupied", .0.row, .0.col)]
    CellOccupied(Pos),
    #[error("no empty cell left on the board")]
    NoMovesAvailable,
}

/// Failure while handling a protocol command.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed command: {0}")]
    Malformed(String),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}

impl ProtocolError {
    /// Whether the session must stop after answering `ERROR`.
    ///
    /// Illegal moves and malformed lines are answered and forgotten. A full
    /// board has no protocol answer.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProtocolError::Board(BoardError::NoMovesAvailable))
    }
}
