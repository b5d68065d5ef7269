//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal candidates per origin square, then keeps only those
//! that do not leave the mover's king attacked. Each candidate is probed
//! through a `SimulatedMove`, so the position is restored after every probe
//! even when the probe fails.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::square_geometry::in_bounds;
use crate::move_generation::legal_move_apply::SimulatedMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> ChessResult<Vec<ChessMove>> {
        legal_moves(game_state)
    }
}

/// Pseudo-legal moves of the piece on `from`. Empty squares and pieces of
/// the side not to move produce nothing.
pub fn pseudo_legal_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game_state.board.get(from) else {
        return;
    };
    if piece.color != game_state.side_to_move {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, out),
    }
}

pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut pseudo = Vec::with_capacity(128);
    for (from, _) in game_state.board.occupied() {
        pseudo_legal_moves_from(game_state, from, &mut pseudo);
    }
    pseudo
}

pub fn legal_moves_from(game_state: &mut GameState, from: Square) -> ChessResult<Vec<ChessMove>> {
    if !in_bounds(i16::from(from)) {
        return Err(ChessErrors::SquareOutOfBounds(i16::from(from)));
    }
    let mut pseudo = Vec::new();
    pseudo_legal_moves_from(game_state, from, &mut pseudo);
    retain_legal(game_state, pseudo)
}

pub fn legal_moves(game_state: &mut GameState) -> ChessResult<Vec<ChessMove>> {
    let pseudo = pseudo_legal_moves(game_state);
    retain_legal(game_state, pseudo)
}

fn retain_legal(game_state: &mut GameState, pseudo: Vec<ChessMove>) -> ChessResult<Vec<ChessMove>> {
    let mover = game_state.side_to_move;
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        let simulated = SimulatedMove::new(game_state, mv)?;
        // Illegal if own king is in check after move.
        if !is_king_in_check(&simulated.board, mover)? {
            legal.push(mv);
        }
    }

    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, legal_moves_from, pseudo_legal_moves, LegalMoveGenerator};
    use crate::game_state::chess_types::GameState;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let mut game = GameState::new_game();
        let before = game.duplicate();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&mut game)
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
        assert_eq!(game, before);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        // Light rook e2 pinned by the dark rook on e8 against the king on e1.
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let rook_moves = legal_moves_from(&mut game, 12).expect("generation should succeed");
        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|mv| mv.to % 8 == 4));
        assert!(rook_moves.iter().any(|mv| mv.to == 60 && mv.is_capture()));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        // Dark rook on d8 controls the d-file.
        let mut game = GameState::from_fen("3r2k1/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let moves = legal_moves_from(&mut game, 4).expect("generation should succeed");
        assert!(moves.iter().all(|mv| mv.to % 8 != 3));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn pseudo_legal_list_is_a_superset_of_legal() {
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let pseudo = pseudo_legal_moves(&game);
        let legal = legal_moves(&mut game).expect("generation should succeed");
        assert!(pseudo.len() > legal.len());
        assert!(legal.iter().all(|mv| pseudo.contains(mv)));
    }

    #[test]
    fn other_sides_pieces_yield_no_moves() {
        let mut game = GameState::new_game();
        assert!(legal_moves_from(&mut game, 52).expect("generation should succeed").is_empty());
        assert!(legal_moves_from(&mut game, 28).expect("generation should succeed").is_empty());
    }
}
