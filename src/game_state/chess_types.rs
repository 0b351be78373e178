//! Core vocabulary for the bitboard board representation.
//!
//! Squares are indexed `0 == a1`, `7 == h1`, `56 == a8`, `63 == h8`, so
//! `file = square % 8` and `rank = square / 8`. Pieces are a tagged
//! `{ color, kind }` pair; numeric piece codes only exist at the move codec
//! boundary.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::bitboard::Bitboard;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move. `Light` moves first.
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

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind; color is stored separately for cache-friendly layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Pieces a pawn may promote to.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

impl PieceKind {
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

    /// Lowercase letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for light, lowercase for dark.
    pub fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::Light => ch.to_ascii_uppercase(),
            Color::Dark => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::new(color, kind))
    }
}

/// Board square index in `0..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Checked constructor for indices coming from outside the crate.
    pub fn new(index: u8) -> ChessResult<Self> {
        if index < 64 {
            Ok(Self(index))
        } else {
            Err(ChessError::InvalidSquare(index as usize))
        }
    }

    /// Wraps the index into range. Only for values already known to be valid
    /// (table loops, bit scans).
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Self {
        Self(index & 63)
    }

    #[inline]
    pub const fn from_file_rank(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// File `0..=7` (a..h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank `0..=7` (1..8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// One-based `(file, rank)` pair, e.g. `e2 -> (5, 2)`.
    #[inline]
    pub const fn coordinates(self) -> (u8, u8) {
        (self.file() + 1, self.rank() + 1)
    }

    /// Square displaced by whole files and ranks, `None` when off the board.
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let (Some(file), Some(rank)) = (
            (self.file() as i8).checked_add(file_delta),
            (self.rank() as i8).checked_add(rank_delta),
        ) else {
            return None;
        };
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Self((rank * 8 + file) as u8))
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(1u64 << self.0)
    }
}

impl TryFrom<usize> for Square {
    type Error = ChessError;

    fn try_from(index: usize) -> ChessResult<Self> {
        if index < 64 {
            Ok(Self(index as u8))
        } else {
            Err(ChessError::InvalidSquare(index))
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file());
        let rank = char::from(b'1' + self.rank());
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        crate::utils::algebraic::algebraic_to_square(s)
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;
