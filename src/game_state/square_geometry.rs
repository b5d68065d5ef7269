//! Linear square geometry.
//!
//! Squares are indexed `rank * 8 + file` with `0 == a1`, `7 == h1` and
//! `63 == h8`. These helpers are stateless and never fail; callers stepping
//! by an offset must check `in_bounds` (or use `offset_square`) before
//! touching the board.

use crate::game_state::chess_types::Square;

pub const BOARD_SQUARES: usize = 64;

#[inline]
pub const fn rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

/// True when a (possibly negative) linear index names a board square.
#[inline]
pub const fn in_bounds(index: i16) -> bool {
    index >= 0 && index < BOARD_SQUARES as i16
}

/// Step `from` by a linear `offset`, rejecting targets that leave the board
/// or wrap onto a neighbouring rank.
///
/// `max_file_delta` is the largest file distance the offset can legitimately
/// cover: 1 for king, pawn and slider steps, 2 for knight jumps. Any larger
/// file distance between origin and target means the step crossed the a/h
/// edge.
#[inline]
pub fn offset_square(from: Square, offset: i8, max_file_delta: u8) -> Option<Square> {
    let target = i16::from(from) + i16::from(offset);
    if !in_bounds(target) {
        return None;
    }

    let target = target as Square;
    if file(from).abs_diff(file(target)) > max_file_delta {
        return None;
    }

    Some(target)
}
