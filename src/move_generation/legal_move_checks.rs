//! Attack and check oracle.
//!
//! Answers "does any piece of this color threaten that square" by walking
//! the per-kind offset and ray patterns outward from the target square. The
//! mover's own legality is ignored; the answer is only used for king safety.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::square_geometry::offset_square;
use crate::move_generation::legal_move_shared::{
    fixed_targets, ray, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_FILE_REACH, KNIGHT_OFFSETS,
    ROOK_DIRECTIONS, STEP_FILE_REACH,
};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find(Piece::new(PieceKind::King, color))
}

/// True when `color`'s king is attacked by the other side.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(board, color).ok_or(ChessErrors::MissingKing(color))?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| board.get(sq) == Some(Piece::new(kind, attacker_color));

    // Attacking pawns sit one rank behind the target from their own side's view.
    let behind = -attacker_color.pawn_push_offset();
    let pawn_attack = [behind - 1, behind + 1]
        .into_iter()
        .filter_map(|offset| offset_square(square, offset, STEP_FILE_REACH))
        .any(|sq| holds(sq, PieceKind::Pawn));
    if pawn_attack {
        return true;
    }

    if fixed_targets(square, &KNIGHT_OFFSETS, KNIGHT_FILE_REACH).any(|sq| holds(sq, PieceKind::Knight)) {
        return true;
    }

    if fixed_targets(square, &KING_OFFSETS, STEP_FILE_REACH).any(|sq| holds(sq, PieceKind::King)) {
        return true;
    }

    let slider_hit = |directions: &[i8], kind: PieceKind| {
        directions.iter().any(|direction| {
            ray(board, square, *direction)
                .last()
                .is_some_and(|sq| holds(sq, kind) || holds(sq, PieceKind::Queen))
        })
    };

    slider_hit(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hit(&ROOK_DIRECTIONS, PieceKind::Rook)
}
