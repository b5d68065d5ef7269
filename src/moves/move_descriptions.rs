//! Move value shared by generation, application and history.
//!
//! A generated (pseudo-legal) move and a committed move have the same shape.
//! The copy stored in history is the one `revert` trusts: `commit` fills in
//! the captured piece and the special-move flags from the board before
//! pushing it.

use std::fmt;

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

impl ChessMove {
    /// Plain move as a consumer would describe it; capture and special flags
    /// are resolved when it is committed.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
            captured: None,
            is_en_passant: false,
            is_castling: false,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            is_en_passant: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn castling(from: Square, to: Square) -> Self {
        Self {
            is_castling: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// True when both moves name the same from/to/promotion triple.
    #[inline]
    pub fn same_coordinates(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

/// Coordinate notation, for example `e2e4` or `e7e8q`.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = square_to_algebraic(self.from).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(self.to).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.fen_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn display_uses_coordinate_notation() {
        assert_eq!(ChessMove::new(12, 28).to_string(), "e2e4");
        assert_eq!(
            ChessMove::with_promotion(52, 60, PieceKind::Queen).to_string(),
            "e7e8q"
        );
    }

    #[test]
    fn coordinates_ignore_resolved_capture_data() {
        let plain = ChessMove::new(35, 44);
        let resolved = ChessMove::en_passant(35, 44, Piece::new(PieceKind::Pawn, Color::Dark));
        assert!(plain.same_coordinates(&resolved));
        assert!(resolved.is_capture());
        assert!(!plain.is_capture());
    }
}
