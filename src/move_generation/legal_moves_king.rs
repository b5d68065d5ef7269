//! King step and castling move generation.
//!
//! Castling is offered only when the wing's right is still held, the king
//! and rook stand on their home squares, every square strictly between them
//! is empty, and none of the king's origin, transit or destination squares is
//! attacked.

use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::square_geometry::square_at;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{
    enemy_piece_on, fixed_targets, own_piece_on, KING_OFFSETS, STEP_FILE_REACH,
};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let board = &game_state.board;
    let side = game_state.side_to_move;

    for to in fixed_targets(from, &KING_OFFSETS, STEP_FILE_REACH) {
        if own_piece_on(board, side, to) {
            continue;
        }
        out.push(match enemy_piece_on(board, side, to) {
            Some(captured) => ChessMove::capture(from, to, captured),
            None => ChessMove::new(from, to),
        });
    }

    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<ChessMove>) {
    let board = &game_state.board;
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let back_rank = side.back_rank();

    if king_from != square_at(back_rank, KING_HOME_FILE) {
        return;
    }

    let mut king_safe_at_home = None;

    for wing in CastleWing::BOTH {
        if !game_state.castling_rights.has(side, wing) {
            continue;
        }

        let rook_from = square_at(back_rank, wing.rook_home_file());
        if board.get(rook_from) != Some(Piece::new(PieceKind::Rook, side)) {
            continue;
        }

        let (low, high) = if rook_from < king_from {
            (rook_from, king_from)
        } else {
            (king_from, rook_from)
        };
        if !(low + 1..high).all(|square| board.is_empty(square)) {
            continue;
        }

        // Cannot castle out of check.
        let safe_at_home = *king_safe_at_home
            .get_or_insert_with(|| !is_square_attacked(board, king_from, enemy));
        if !safe_at_home {
            return;
        }

        let king_to = square_at(back_rank, wing.king_destination_file());
        let transit = square_at(back_rank, wing.rook_destination_file());
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, king_to, enemy) {
            continue;
        }

        out.push(ChessMove::castling(king_from, king_to));
    }
}
