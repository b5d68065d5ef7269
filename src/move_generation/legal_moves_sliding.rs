//! Pseudo-legal bishop, rook and queen move generation.
//!
//! The three sliders share one ray walk: keep stepping until the edge, stop
//! before an own piece, stop on (and capture) an enemy piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    enemy_piece_on, own_piece_on, ray, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::ChessMove;

#[inline]
pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &BISHOP_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &ROOK_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &QUEEN_DIRECTIONS, out);
}

fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    directions: &[i8],
    out: &mut Vec<ChessMove>,
) {
    let board = &game_state.board;
    let side = game_state.side_to_move;

    for direction in directions {
        for to in ray(board, from, *direction) {
            if own_piece_on(board, side, to) {
                break;
            }
            out.push(match enemy_piece_on(board, side, to) {
                Some(captured) => ChessMove::capture(from, to, captured),
                None => ChessMove::new(from, to),
            });
        }
    }
}
