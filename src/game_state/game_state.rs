//! Core game state and its programmatic surface.
//!
//! `GameState` owns the mailbox board plus every derived field (side to move,
//! castling rights, en-passant target, clocks) and the history stack used by
//! make/unmake. Consumers query legal moves, commit and revert moves, and ask
//! for check/checkmate/stalemate through the methods here; the heavy lifting
//! lives in `move_generation`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move, SimulatedMove};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_from};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Make/unmake stack ---
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),

            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, light to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard_setup(),
            castling_rights: CastlingRights::ALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Deep copy of the board, every derived field and the history stack.
    /// Use this (not `Board::duplicate`) to explore alternative lines.
    #[inline]
    pub fn duplicate(&self) -> GameState {
        self.clone()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    /// Committed, not yet reverted moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    pub fn legal_moves(&mut self) -> ChessResult<Vec<ChessMove>> {
        legal_moves(self)
    }

    pub fn legal_moves_from(&mut self, from: Square) -> ChessResult<Vec<ChessMove>> {
        legal_moves_from(self, from)
    }

    /// Legal move matching the given coordinates, if there is one.
    pub fn find_legal_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<ChessMove> {
        let wanted = ChessMove {
            promotion,
            ..ChessMove::new(from, to)
        };
        legal_moves_from(self, from)?
            .into_iter()
            .find(|mv| mv.same_coordinates(&wanted))
            .ok_or_else(|| ChessErrors::IllegalMove(wanted.to_string()))
    }

    /// Apply `mv` for the side to move. Legality is not re-checked; pass a
    /// move obtained from `legal_moves` or `find_legal_move`.
    #[inline]
    pub fn commit(&mut self, mv: ChessMove) -> ChessResult<()> {
        make_move(self, mv)
    }

    /// Undo the most recent commit and return the move that was undone.
    #[inline]
    pub fn revert(&mut self) -> ChessResult<ChessMove> {
        unmake_move(self)
    }

    /// Commit `mv` and hand back a guard that reverts it when dropped.
    #[inline]
    pub fn simulate(&mut self, mv: ChessMove) -> ChessResult<SimulatedMove<'_>> {
        SimulatedMove::new(self, mv)
    }

    #[inline]
    pub fn in_check(&self, color: Color) -> ChessResult<bool> {
        is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&mut self) -> ChessResult<bool> {
        Ok(self.game_status()? == GameStatus::Checkmate {
            winner: self.side_to_move.opposite(),
        })
    }

    pub fn is_stalemate(&mut self) -> ChessResult<bool> {
        Ok(self.game_status()? == GameStatus::Stalemate)
    }

    pub fn game_status(&mut self) -> ChessResult<GameStatus> {
        if !legal_moves(self)?.is_empty() {
            return Ok(GameStatus::Ongoing);
        }
        let status = if self.in_check(self.side_to_move)? {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
        Ok(status)
    }
}
