//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by board-notation parsing,
//! move application and the check oracle. Variants fall into two groups:
//!
//! - Structural input errors (`InvalidFen`, `InvalidAlgebraic`,
//!   `InvalidMoveText`): the caller handed over malformed text. Nothing was
//!   changed; fix the input and try again.
//! - State precondition violations (`EmptyOriginSquare`, `WrongSideToMove`,
//!   `EmptyHistory`, `MissingKing`, `SquareOutOfBounds`, `IllegalMove`): the
//!   caller asked for something the current position cannot support. These are
//!   programming errors; re-establish a known-good `GameState` before issuing
//!   further moves.
//!
//! `WorkerThreadPanicked` is the one internal failure: a perft worker thread
//! died before reporting.
//!
//! No operation is retried internally. Every operation is deterministic, so a
//! failure is never transient.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Board notation could not be parsed.
    ///
    /// Payload: what was wrong with it (missing field, wrong rank count, ...).
    InvalidFen(String),

    /// A square name such as `e4` could not be parsed.
    InvalidAlgebraic(String),

    /// Coordinate move text such as `e7e8q` could not be parsed.
    InvalidMoveText(String),

    /// Tried to commit a move whose origin square holds no piece.
    EmptyOriginSquare(Square),

    /// Tried to commit a move with a piece that does not belong to the side to move.
    WrongSideToMove(Square),

    /// Tried to revert with no committed move on the history stack.
    EmptyHistory,

    /// The board has no king for this color, so check cannot be decided.
    MissingKing(Color),

    /// A linear index outside `0..64` was used as a square.
    SquareOutOfBounds(i16),

    /// The requested coordinates do not match any legal move in the position.
    IllegalMove(String),

    /// A parallel perft worker panicked before reporting its counts.
    WorkerThreadPanicked,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessErrors::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            ChessErrors::EmptyOriginSquare(square) => {
                write!(f, "no piece on origin square {square}")
            }
            ChessErrors::WrongSideToMove(square) => {
                write!(f, "piece on square {square} does not belong to the side to move")
            }
            ChessErrors::EmptyHistory => write!(f, "no committed move to revert"),
            ChessErrors::MissingKing(color) => write!(f, "no {color} king on the board"),
            ChessErrors::SquareOutOfBounds(index) => {
                write!(f, "square index {index} is outside the board")
            }
            ChessErrors::IllegalMove(text) => write!(f, "illegal move: {text}"),
            ChessErrors::WorkerThreadPanicked => write!(f, "perft worker thread panicked"),
        }
    }
}

impl Error for ChessErrors {}
