//! Value types shared by the board, the attack oracle and move generation.
//!
//! Everything here is `Copy`: a piece crossing a board-cell boundary is always
//! a fresh value, so history entries and duplicated boards never alias.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`, `0 == a1`).
pub type Square = u8;

/// Piece ownership and side to move. `Light` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Linear offset of a single pawn push for this color.
    #[inline]
    pub const fn pawn_push_offset(self) -> i8 {
        match self {
            Color::Light => 8,
            Color::Dark => -8,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Promotion choices in the order they are generated.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase board-notation letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let piece = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(piece)
    }
}

/// A colored piece occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Board-notation letter: uppercase for light, lowercase for dark.
    #[inline]
    pub fn fen_char(self) -> char {
        match self.color {
            Color::Light => self.kind.fen_char().to_ascii_uppercase(),
            Color::Dark => self.kind.fen_char(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(kind, color))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::Kingside, CastleWing::Queenside];

    /// File of the wing's rook before it has moved.
    #[inline]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleWing::Kingside => 7,
            CastleWing::Queenside => 0,
        }
    }

    /// File the king lands on after castling to this wing.
    #[inline]
    pub const fn king_destination_file(self) -> u8 {
        match self {
            CastleWing::Kingside => 6,
            CastleWing::Queenside => 2,
        }
    }

    /// File the rook lands on after castling to this wing.
    #[inline]
    pub const fn rook_destination_file(self) -> u8 {
        match self {
            CastleWing::Kingside => 5,
            CastleWing::Queenside => 3,
        }
    }
}

/// Per-side, per-wing castling availability. Flags only ever go from
/// `true` to `false` during play; `revert` restores them from history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub const fn has(self, color: Color, wing: CastleWing) -> bool {
        match (color, wing) {
            (Color::Light, CastleWing::Kingside) => self.light_kingside,
            (Color::Light, CastleWing::Queenside) => self.light_queenside,
            (Color::Dark, CastleWing::Kingside) => self.dark_kingside,
            (Color::Dark, CastleWing::Queenside) => self.dark_queenside,
        }
    }

    #[inline]
    pub fn grant(&mut self, color: Color, wing: CastleWing) {
        *self.flag_mut(color, wing) = true;
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, wing: CastleWing) {
        *self.flag_mut(color, wing) = false;
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleWing::Kingside);
        self.revoke(color, CastleWing::Queenside);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.light_kingside || self.light_queenside || self.dark_kingside || self.dark_queenside)
    }

    fn flag_mut(&mut self, color: Color, wing: CastleWing) -> &mut bool {
        match (color, wing) {
            (Color::Light, CastleWing::Kingside) => &mut self.light_kingside,
            (Color::Light, CastleWing::Queenside) => &mut self.light_queenside,
            (Color::Dark, CastleWing::Kingside) => &mut self.dark_kingside,
            (Color::Dark, CastleWing::Queenside) => &mut self.dark_queenside,
        }
    }
}
