use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    enemy_piece_on, fixed_targets, own_piece_on, KNIGHT_FILE_REACH, KNIGHT_OFFSETS,
};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let board = &game_state.board;
    let side = game_state.side_to_move;

    for to in fixed_targets(from, &KNIGHT_OFFSETS, KNIGHT_FILE_REACH) {
        if own_piece_on(board, side, to) {
            continue;
        }
        out.push(match enemy_piece_on(board, side, to) {
            Some(captured) => ChessMove::capture(from, to, captured),
            None => ChessMove::new(from, to),
        });
    }
}
