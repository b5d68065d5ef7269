//! Make/unmake protocol.
//!
//! `make_move` mutates the game in place and pushes an `UndoState` holding the
//! resolved move and every derived field it overwrote. `unmake_move` pops that
//! record and restores the predecessor position exactly. `SimulatedMove` wraps
//! the pair for speculative probes: the move is undone when the guard drops,
//! whichever way the probing code exits.

use std::ops::{Deref, DerefMut};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::square_geometry::{file, in_bounds, rank, square_at};
use crate::moves::move_descriptions::ChessMove;

/// Commit `mv` for the side to move.
///
/// Only `from`, `to` and `promotion` are trusted; the captured piece and the
/// en-passant and castling flags are re-derived from the board so a move
/// built from bare coordinates is handled the same as a generated one.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> ChessResult<()> {
    for square in [mv.from, mv.to] {
        if !in_bounds(i16::from(square)) {
            return Err(ChessErrors::SquareOutOfBounds(i16::from(square)));
        }
    }

    let moving_color = game_state.side_to_move;
    let moved_piece = game_state
        .board
        .get(mv.from)
        .ok_or(ChessErrors::EmptyOriginSquare(mv.from))?;
    if moved_piece.color != moving_color {
        return Err(ChessErrors::WrongSideToMove(mv.from));
    }

    let resolved = resolve_move(game_state, mv, moved_piece);

    game_state.undo_stack.push(UndoState {
        mv: resolved,
        moved_piece,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    });

    let board = &mut game_state.board;
    if resolved.is_en_passant {
        board.set(en_passant_capture_square(resolved), None);
    }
    board.set(resolved.from, None);
    let placed = match resolved.promotion {
        Some(kind) if moved_piece.kind == PieceKind::Pawn => Piece::new(kind, moving_color),
        _ => moved_piece,
    };
    board.set(resolved.to, Some(placed));

    if resolved.is_castling {
        let (rook_from, rook_to) = castling_rook_squares(resolved);
        let rook = board.get(rook_from);
        board.set(rook_from, None);
        board.set(rook_to, rook);
    }

    update_castling_rights(&mut game_state.castling_rights, resolved, moved_piece);

    game_state.en_passant_square =
        if moved_piece.kind == PieceKind::Pawn && resolved.from.abs_diff(resolved.to) == 16 {
            Some((resolved.from + resolved.to) / 2)
        } else {
            None
        };

    if moved_piece.kind == PieceKind::Pawn || resolved.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = moving_color.opposite();

    Ok(())
}

/// Revert the most recent committed move and return it.
pub fn unmake_move(game_state: &mut GameState) -> ChessResult<ChessMove> {
    let undo = game_state.undo_stack.pop().ok_or(ChessErrors::EmptyHistory)?;
    let mv = undo.mv;

    game_state.side_to_move = undo.moved_piece.color;

    let board = &mut game_state.board;
    board.set(mv.from, Some(undo.moved_piece));
    board.set(mv.to, None);

    if let Some(captured) = mv.captured {
        let capture_square = if mv.is_en_passant {
            en_passant_capture_square(mv)
        } else {
            mv.to
        };
        board.set(capture_square, Some(captured));
    }

    if mv.is_castling {
        let (rook_home, rook_castled) = castling_rook_squares(mv);
        let rook = board.get(rook_castled);
        board.set(rook_castled, None);
        board.set(rook_home, rook);
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;

    Ok(mv)
}

/// A move committed for inspection only; reverted when dropped.
///
/// Further moves may be committed through `DerefMut` (perft recurses this
/// way). On drop, history is unwound back to its length before the probe, so
/// the wrapped state always returns to exactly where it started.
pub struct SimulatedMove<'a> {
    game_state: &'a mut GameState,
    history_len: usize,
}

impl<'a> SimulatedMove<'a> {
    pub fn new(game_state: &'a mut GameState, mv: ChessMove) -> ChessResult<Self> {
        let history_len = game_state.undo_stack.len();
        make_move(game_state, mv)?;
        Ok(Self {
            game_state,
            history_len,
        })
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        while self.game_state.undo_stack.len() > self.history_len {
            if unmake_move(self.game_state).is_err() {
                break;
            }
        }
    }
}

fn resolve_move(game_state: &GameState, mv: ChessMove, moved_piece: Piece) -> ChessMove {
    let target = game_state.board.get(mv.to);
    let is_pawn = moved_piece.kind == PieceKind::Pawn;

    // En passant only when the double-pushed pawn really stands beside the origin.
    let victim = Piece::new(PieceKind::Pawn, moved_piece.color.opposite());
    let is_en_passant = is_pawn
        && target.is_none()
        && file(mv.from) != file(mv.to)
        && game_state.en_passant_square == Some(mv.to)
        && game_state.board.get(en_passant_capture_square(mv)) == Some(victim);
    let is_castling = moved_piece.kind == PieceKind::King && file(mv.from).abs_diff(file(mv.to)) == 2;

    let captured = if is_en_passant { Some(victim) } else { target };

    ChessMove {
        from: mv.from,
        to: mv.to,
        promotion: if is_pawn { mv.promotion } else { None },
        captured,
        is_en_passant,
        is_castling,
    }
}

/// The pawn taken en passant stands on the destination file, origin rank.
#[inline]
fn en_passant_capture_square(mv: ChessMove) -> Square {
    square_at(rank(mv.from), file(mv.to))
}

/// `(home, castled)` squares of the rook that accompanies a castling king.
fn castling_rook_squares(mv: ChessMove) -> (Square, Square) {
    let back_rank = rank(mv.from);
    let wing = if file(mv.to) > file(mv.from) {
        CastleWing::Kingside
    } else {
        CastleWing::Queenside
    };
    (
        square_at(back_rank, wing.rook_home_file()),
        square_at(back_rank, wing.rook_destination_file()),
    )
}

fn update_castling_rights(rights: &mut CastlingRights, mv: ChessMove, moved_piece: Piece) {
    if moved_piece.kind == PieceKind::King {
        rights.revoke_all(moved_piece.color);
    }

    // A rook leaving its home square, or anything landing on a rook home
    // square (a capture there), ends that wing's right.
    for square in [mv.from, mv.to] {
        for color in [Color::Light, Color::Dark] {
            for wing in CastleWing::BOTH {
                if square == square_at(color.back_rank(), wing.rook_home_file()) {
                    rights.revoke(color, wing);
                }
            }
        }
    }
}
