//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes, diagonal captures, en-passant captures, and the
//! four-way promotion fan-out on the far rank.

use crate::game_state::chess_types::*;
use crate::game_state::square_geometry::{file, offset_square, rank, square_at};
use crate::move_generation::legal_move_shared::{enemy_piece_on, STEP_FILE_REACH};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let board = &game_state.board;
    let side = game_state.side_to_move;
    let push = side.pawn_push_offset();

    if let Some(one_step) = offset_square(from, push, 0) {
        if board.is_empty(one_step) {
            push_with_promotions(side, ChessMove::new(from, one_step), out);

            if rank(from) == side.pawn_start_rank() {
                if let Some(two_step) = offset_square(one_step, push, 0) {
                    if board.is_empty(two_step) {
                        out.push(ChessMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = offset_square(from, push + file_delta, STEP_FILE_REACH) else {
            continue;
        };

        if let Some(captured) = enemy_piece_on(board, side, to) {
            push_with_promotions(side, ChessMove::capture(from, to, captured), out);
        } else if game_state.en_passant_square == Some(to) && board.is_empty(to) {
            // The captured pawn stands beside the origin, not on the destination.
            let captured = Piece::new(PieceKind::Pawn, side.opposite());
            if board.get(square_at(rank(from), file(to))) == Some(captured) {
                out.push(ChessMove::en_passant(from, to, captured));
            }
        }
    }
}

fn push_with_promotions(side: Color, mv: ChessMove, out: &mut Vec<ChessMove>) {
    if rank(mv.to) != side.promotion_rank() {
        out.push(mv);
        return;
    }

    for promotion in PieceKind::PROMOTION_CHOICES {
        out.push(ChessMove {
            promotion: Some(promotion),
            ..mv
        });
    }
}
