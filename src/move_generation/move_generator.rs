use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Produces the legal moves of the side to move.
///
/// Takes the state mutably because legality is decided by committing each
/// candidate and reverting it; implementations must hand the state back
/// exactly as they received it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> ChessResult<Vec<ChessMove>>;
}
