//! Coordinate move text (`e2e4`, `e7e8q`) to legal moves.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

/// Parse coordinate text and resolve it against the legal moves of the
/// position. The returned move carries its capture and special-move flags.
pub fn parse_move(game_state: &mut GameState, long_algebraic: &str) -> ChessResult<ChessMove> {
    let (from, to, promotion) = parse_coordinates(long_algebraic)?;
    game_state.find_legal_move(from, to, promotion)
}

/// Syntax only: two squares and an optional promotion letter.
pub fn parse_coordinates(long_algebraic: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessErrors::InvalidMoveText(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;

    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
    };

    Ok((from, to, promotion))
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
