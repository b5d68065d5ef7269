//! Offset tables and walking helpers shared by the attack oracle and the
//! per-piece generators.
//!
//! Every neighbour lookup on the linear board goes through
//! `square_geometry::offset_square`, which rejects steps that wrap from one
//! edge file onto the opposite edge of another rank.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::square_geometry::offset_square;

pub const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];
pub const KING_OFFSETS: [i8; 8] = [9, 8, 7, 1, -1, -7, -8, -9];
pub const ROOK_DIRECTIONS: [i8; 4] = [8, -8, 1, -1];
pub const BISHOP_DIRECTIONS: [i8; 4] = [9, 7, -7, -9];
pub const QUEEN_DIRECTIONS: [i8; 8] = [8, -8, 1, -1, 9, 7, -7, -9];

/// Largest file distance a knight jump covers.
pub const KNIGHT_FILE_REACH: u8 = 2;
/// Largest file distance a single king, pawn or slider step covers.
pub const STEP_FILE_REACH: u8 = 1;

/// Squares reached from `from` by each fixed offset, skipping off-board or
/// wrapped targets.
#[inline]
pub fn fixed_targets(
    from: Square,
    offsets: &'static [i8],
    max_file_delta: u8,
) -> impl Iterator<Item = Square> {
    offsets
        .iter()
        .filter_map(move |offset| offset_square(from, *offset, max_file_delta))
}

/// Walk from `from` along `direction` and return the squares passed over,
/// in order. Stops at the board edge. The first occupied square is included
/// and ends the ray.
pub fn ray(board: &Board, from: Square, direction: i8) -> Ray<'_> {
    Ray {
        board,
        current: Some(from),
        direction,
        blocked: false,
    }
}

pub struct Ray<'a> {
    board: &'a Board,
    current: Option<Square>,
    direction: i8,
    blocked: bool,
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.blocked {
            return None;
        }
        let next = offset_square(self.current?, self.direction, STEP_FILE_REACH);
        self.current = next;
        let square = next?;
        self.blocked = !self.board.is_empty(square);
        Some(square)
    }
}

#[inline]
pub fn enemy_piece_on(board: &Board, color: Color, square: Square) -> Option<Piece> {
    board.get(square).filter(|piece| piece.color != color)
}

#[inline]
pub fn own_piece_on(board: &Board, color: Color, square: Square) -> bool {
    board.get(square).is_some_and(|piece| piece.color == color)
}
