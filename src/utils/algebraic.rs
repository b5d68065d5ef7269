//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by the FEN and coordinate-move components.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;
use crate::game_state::square_geometry::{file, in_bounds, rank, square_at};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file_byte = bytes[0];
    let rank_byte = bytes[1];

    if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(square_at(rank_byte - b'1', file_byte - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !in_bounds(i16::from(square)) {
        return Err(ChessErrors::SquareOutOfBounds(i16::from(square)));
    }

    let file_char = char::from(b'a' + file(square));
    let rank_char = char::from(b'1' + rank(square));

    Ok(format!("{file_char}{rank_char}"))
}
