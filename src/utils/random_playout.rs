//! Uniformly random self-play, used for diagnostics and make/unmake soak tests.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutReport {
    pub moves: Vec<ChessMove>,
    pub status: GameStatus,
}

/// Commit up to `max_plies` random legal moves onto `game_state`. Stops early
/// on checkmate or stalemate. The moves stay on the history stack, so the
/// caller can `revert` them one by one.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    rng: &mut R,
    max_plies: usize,
) -> ChessResult<PlayoutReport> {
    let move_generator = LegalMoveGenerator;
    let mut moves = Vec::new();

    for _ in 0..max_plies {
        let legal_moves = move_generator.generate_legal_moves(game_state)?;
        let Some(&picked) = legal_moves.as_slice().choose(rng) else {
            break;
        };
        game_state.commit(picked)?;
        moves.push(picked);
    }

    Ok(PlayoutReport {
        moves,
        status: game_state.game_status()?,
    })
}
