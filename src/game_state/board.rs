//! Flat 64-cell mailbox board.
//!
//! A `Board` maps each square to an optional `Piece`. It knows nothing about
//! whose turn it is or which rights remain; that derived state lives on
//! `GameState`.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::square_geometry::{square_at, BOARD_SQUARES};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; BOARD_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [None; BOARD_SQUARES],
        }
    }

    /// Standard initial setup with both armies on their home ranks.
    pub fn standard_setup() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK_LAYOUT.into_iter().enumerate() {
                let file = file as u8;
                board.set(square_at(color.back_rank(), file), Some(Piece::new(kind, color)));
                board.set(
                    square_at(color.pawn_start_rank(), file),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Occupant of `square`; empty cells and indices past `h8` return `None`.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells.get(usize::from(square)).copied().flatten()
    }

    /// Unconditionally overwrite `square`. Callers pass validated squares.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[usize::from(square)] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Independent copy of the occupancy. Derived game state is not included;
    /// use `GameState::duplicate` to branch a whole game.
    #[inline]
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /// Occupied squares in ascending index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(square, cell)| cell.map(|piece| (square as Square, piece)))
    }

    /// First square holding `piece`, scanning from a1.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.occupied()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(square, _)| square)
    }
}
