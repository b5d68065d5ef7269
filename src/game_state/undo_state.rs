use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single history record for `make_move` / `unmake_move`.
///
/// Holds the resolved move plus a snapshot of every derived field the move
/// overwrote, so unmaking restores the predecessor state exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub moved_piece: Piece,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
